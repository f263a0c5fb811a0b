//! HTTP route handlers

pub mod round;
pub mod status;
