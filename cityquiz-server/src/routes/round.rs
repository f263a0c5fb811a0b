//! Round lifecycle endpoints
//!
//! The front end drives the whole game through these: generate a round,
//! stream guess activations in, check the score, then reveal ground truth.
//! City attributes stay server-side until reveal.

use crate::state::ServerState;
use axum::{
    extract::{Query, State},
    Json,
};
use cityquiz_core::{
    Category, CityFilter, GameSession, Guesses, Phase, Region, DEFAULT_MIN_POPULATION,
    DEFAULT_ROUND_SIZE,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Serialize)]
pub struct RoundResponse {
    pub phase: Phase,
    pub cities: Vec<String>,
    pub guesses: Guesses,
    /// Whether the "New Round" control should be shown
    pub new_round_enabled: bool,
    /// Whether the "Check" control should be shown
    pub check_enabled: bool,
}

fn round_response(session: &GameSession) -> RoundResponse {
    RoundResponse {
        phase: session.phase(),
        cities: session
            .round()
            .city_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        guesses: session.round().guesses().clone(),
        new_round_enabled: session.can_generate(),
        check_enabled: session.can_check(),
    }
}

/// Get the current round (names and guesses only, no ground truth)
pub async fn get_round(State(state): State<Arc<ServerState>>) -> Json<RoundResponse> {
    let session = state.session.read().unwrap();
    Json(round_response(&session))
}

/// Query parameters, e.g. `?population=30000&region=eu`
#[derive(Deserialize)]
pub struct NewRoundParams {
    pub population: Option<u64>,
    pub region: Option<String>,
    pub size: Option<usize>,
}

/// Generate a fresh round; a failed sample leaves the previous round active
pub async fn new_round(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NewRoundParams>,
) -> Json<Value> {
    let filter = CityFilter {
        min_population: params.population.unwrap_or(DEFAULT_MIN_POPULATION),
        region: Region::from_query(params.region.as_deref()),
    };
    let count = params.size.unwrap_or(DEFAULT_ROUND_SIZE);

    let mut session = state.session.write().unwrap();
    match session.new_round(&state.dataset, &filter, count, &mut rand::thread_rng()) {
        Ok(_) => {
            tracing::info!("new round: {:?}", session.round().city_names());
            Json(json!(round_response(&session)))
        }
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}

/// Guess activation event from the front end
#[derive(Deserialize)]
pub struct GuessRequest {
    pub category: Category,
    pub city: String,
}

/// Record one guess; overwrites the prior guess for that category
pub async fn set_guess(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<GuessRequest>,
) -> Json<RoundResponse> {
    let mut session = state.session.write().unwrap();
    session.set_guess(req.category, &req.city);
    Json(round_response(&session))
}

/// Score the current round (does not reveal; the player may re-check)
pub async fn check_round(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let session = state.session.read().unwrap();
    match session.check() {
        Ok(report) => Json(json!({
            "correct": report.correct,
            "wrong": report.wrong,
            "extrema": report.extrema,
        })),
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}

/// Disclose ground truth for the whole round
pub async fn reveal_round(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut session = state.session.write().unwrap();
    match session.reveal() {
        Ok(records) => Json(json!({
            "phase": session.phase(),
            "cities": records,
        })),
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}
