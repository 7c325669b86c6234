use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::instrument;

use super::{models::MatchResult, service::ResultService, types::ResultRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for recording a fixture
///
/// POST /result
#[instrument(name = "record_result", skip(state))]
pub async fn record_result(
    State(state): State<AppState>,
    Json(request): Json<ResultRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let service = ResultService::new(
        Arc::clone(&state.result_repository),
        Arc::clone(&state.manager_repository),
        Arc::clone(&state.season_repository),
    );
    let result = service.record_result(request).await?;
    Ok(Json(result))
}
