use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::Manager,
    service::ManagerService,
    types::{ManagePlayerRequest, ManagePointRequest, ManagerCreateRequest},
};
use crate::shared::{AppError, AppState};

fn manager_service(state: &AppState) -> ManagerService {
    ManagerService::new(
        Arc::clone(&state.manager_repository),
        Arc::clone(&state.player_repository),
    )
}

/// HTTP handler for creating a manager
///
/// POST /manager
#[instrument(name = "create_manager", skip(state))]
pub async fn create_manager(
    State(state): State<AppState>,
    Json(request): Json<ManagerCreateRequest>,
) -> Result<(StatusCode, Json<Manager>), AppError> {
    let manager = manager_service(&state).create_manager(request).await?;
    Ok((StatusCode::CREATED, Json(manager)))
}

/// GET /manager
#[instrument(name = "list_managers", skip(state))]
pub async fn list_managers(State(state): State<AppState>) -> Result<Json<Vec<Manager>>, AppError> {
    let managers = manager_service(&state).list_managers().await?;
    info!(manager_count = managers.len(), "Managers listed");
    Ok(Json(managers))
}

/// HTTP handler for roster changes
///
/// POST /manager/player
#[instrument(name = "manage_players", skip(state))]
pub async fn manage_players(
    State(state): State<AppState>,
    Json(request): Json<ManagePlayerRequest>,
) -> Result<Json<Manager>, AppError> {
    let manager = manager_service(&state).manage_players(request).await?;
    Ok(Json(manager))
}

/// HTTP handler for balance changes
///
/// POST /manager/point
#[instrument(name = "manage_points", skip(state))]
pub async fn manage_points(
    State(state): State<AppState>,
    Json(request): Json<ManagePointRequest>,
) -> Result<Json<Manager>, AppError> {
    let manager = manager_service(&state).manage_points(request).await?;
    Ok(Json(manager))
}
