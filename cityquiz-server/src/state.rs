//! Server state management
//!
//! One game session per server, serialized behind a lock so guess and round
//! events apply one at a time.

use cityquiz_core::GameSession;
use cityquiz_dataset::CityTable;
use std::sync::RwLock;

/// Server-wide shared state
pub struct ServerState {
    pub session: RwLock<GameSession>,
    pub dataset: CityTable,
}

impl ServerState {
    pub fn new(dataset: CityTable) -> Self {
        Self {
            session: RwLock::new(GameSession::new()),
            dataset,
        }
    }
}
