use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::PlayerService,
    types::{PlayerFilter, PlayersResponse},
};
use crate::shared::{AppError, AppState};

fn player_service(state: &AppState) -> PlayerService {
    PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.player_cache),
    )
}

/// HTTP handler for the top players listing
///
/// GET /player
#[instrument(name = "top_players", skip(state))]
pub async fn top_players(State(state): State<AppState>) -> Result<Json<PlayersResponse>, AppError> {
    let response = player_service(&state).top_players().await?;
    info!(player_count = response.count, "Top players listed");
    Ok(Json(response))
}

/// HTTP handler for catalog search
///
/// POST /player/search
#[instrument(name = "search_players", skip(state))]
pub async fn search_players(
    State(state): State<AppState>,
    Json(filter): Json<PlayerFilter>,
) -> Result<Json<PlayersResponse>, AppError> {
    let response = player_service(&state).search(&filter).await?;
    info!(player_count = response.count, "Players searched");
    Ok(Json(response))
}

/// HTTP handler for drawing a random player from a filtered pool
///
/// POST /player/random
#[instrument(name = "random_player", skip(state))]
pub async fn random_player(
    State(state): State<AppState>,
    Json(filter): Json<PlayerFilter>,
) -> Result<Json<PlayersResponse>, AppError> {
    let response = player_service(&state).random_player(&filter).await?;
    Ok(Json(response))
}

/// HTTP handler that drops every cached player pool
///
/// GET /cache/clean
#[instrument(name = "clean_cache", skip(state))]
pub async fn clean_cache(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let removed = player_service(&state).clean_cache().await?;
    Ok(Json(json!({
        "message": "Cache data removed",
        "removed": removed
    })))
}
