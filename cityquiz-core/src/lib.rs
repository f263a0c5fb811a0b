//! CITYQUIZ Core - Round lifecycle and scoring
//!
//! This crate provides the core game logic for CITYQUIZ:
//! - City record and guess categories
//! - Round state with one guess slot per category
//! - Extrema computation and scoring
//! - Reveal records for end-of-round display
//! - The `CitySource` seam to the dataset collaborator

pub mod city;
pub mod error;
pub mod reveal;
pub mod round;
pub mod score;
pub mod session;
pub mod source;

// Re-exports for convenient access
pub use city::City;
pub use error::QuizError;
pub use reveal::{display_records, format_population, DisplayRecord};
pub use round::{Category, Guesses, Phase, RoundState};
pub use score::{compute_extrema, score, Extrema, ScoreReport};
pub use session::GameSession;
pub use source::{CityFilter, CitySource, Region, DEFAULT_MIN_POPULATION, DEFAULT_ROUND_SIZE};
