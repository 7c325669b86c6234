use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::Manager,
    repository::ManagerRepository,
    types::{ManagePlayerRequest, ManagePointRequest, ManagerCreateRequest, PointAction, RosterAction},
};
use crate::player::repository::PlayerRepository;
use crate::shared::AppError;

/// Loads a manager or fails with NotFound
pub async fn require_manager(
    repository: &(dyn ManagerRepository + Send + Sync),
    manager_id: &str,
) -> Result<Manager, AppError> {
    repository
        .get_manager(manager_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Get manager error: {} not found", manager_id)))
}

/// Service for manager accounts, rosters and point balances
pub struct ManagerService {
    repository: Arc<dyn ManagerRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl ManagerService {
    pub fn new(
        repository: Arc<dyn ManagerRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            players,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_manager(&self, request: ManagerCreateRequest) -> Result<Manager, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Manager name is required".to_string()));
        }

        let manager = Manager::new(name.to_string());
        self.repository.create_manager(&manager).await?;

        info!(manager_id = %manager.id, name = %manager.name, "Manager created");
        Ok(manager)
    }

    pub async fn list_managers(&self) -> Result<Vec<Manager>, AppError> {
        self.repository.list_managers().await
    }

    /// Adds a catalog player to the roster or removes one from it
    #[instrument(skip(self))]
    pub async fn manage_players(&self, request: ManagePlayerRequest) -> Result<Manager, AppError> {
        let mut manager = require_manager(self.repository.as_ref(), &request.manager).await?;

        match RosterAction::from(request.action) {
            RosterAction::Remove => {
                if !manager.remove_player(&request.player) {
                    warn!(player_id = %request.player, "Player was not in the roster");
                }
            }
            RosterAction::Add => {
                let player = self
                    .players
                    .get_player(&request.player)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Get player error: {} not found", request.player))
                    })?;

                if !manager.add_player(player) {
                    warn!(player_id = %request.player, "Player already in the roster");
                }
            }
        }

        self.repository.update_manager(&manager).await?;
        info!(
            manager_id = %manager.id,
            roster_size = manager.players.len(),
            "Roster updated"
        );
        Ok(manager)
    }

    /// Spends or credits points on a manager's balance
    #[instrument(skip(self))]
    pub async fn manage_points(&self, request: ManagePointRequest) -> Result<Manager, AppError> {
        let mut manager = require_manager(self.repository.as_ref(), &request.manager).await?;

        match PointAction::from(request.action) {
            PointAction::Spend => {
                if !manager.spend(request.point) {
                    warn!(
                        manager_id = %manager.id,
                        balance = manager.points,
                        requested = request.point,
                        "Insufficient balance"
                    );
                    return Err(AppError::BadRequest(
                        "check your balance to process".to_string(),
                    ));
                }
            }
            PointAction::Credit => manager.credit(request.point),
        }

        self.repository.update_manager(&manager).await?;
        info!(manager_id = %manager.id, balance = manager.points, "Balance updated");
        Ok(manager)
    }
}
