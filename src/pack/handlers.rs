use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::instrument;

use super::{
    service::PackService,
    types::{PackRequest, PackResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for buying and opening a pack
///
/// POST /pack
#[instrument(name = "open_pack", skip(state))]
pub async fn open_pack(
    State(state): State<AppState>,
    Json(request): Json<PackRequest>,
) -> Result<Json<PackResponse>, AppError> {
    let service = PackService::new(
        Arc::clone(&state.manager_repository),
        Arc::clone(&state.player_repository),
    );
    let response = service.open_pack(request).await?;
    Ok(Json(response))
}
