use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::Season,
    service::SeasonService,
    types::{SeasonCreateRequest, SeasonSummary, StatisticRequest},
};
use crate::shared::{AppError, AppState};
use crate::standings::SeasonStatistics;

fn season_service(state: &AppState) -> SeasonService {
    SeasonService::new(Arc::clone(&state.season_repository))
}

/// HTTP handler for creating a season
///
/// POST /season
#[instrument(name = "create_season", skip(state))]
pub async fn create_season(
    State(state): State<AppState>,
    Json(request): Json<SeasonCreateRequest>,
) -> Result<(StatusCode, Json<Season>), AppError> {
    let season = season_service(&state).create_season(request).await?;
    Ok((StatusCode::CREATED, Json(season)))
}

/// GET /season
#[instrument(name = "list_seasons", skip(state))]
pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<Vec<SeasonSummary>>, AppError> {
    let seasons = season_service(&state).list_seasons().await?;
    info!(season_count = seasons.len(), "Seasons listed");
    Ok(Json(seasons))
}

/// HTTP handler for the league table and top scorers of a season
///
/// POST /statistics
#[instrument(name = "get_statistics", skip(state))]
pub async fn get_statistics(
    State(state): State<AppState>,
    Json(request): Json<StatisticRequest>,
) -> Result<Json<SeasonStatistics>, AppError> {
    let statistics = season_service(&state).statistics(&request.season).await?;
    Ok(Json(statistics))
}
