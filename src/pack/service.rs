use rand::Rng;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::PackType,
    types::{PackRequest, PackResponse},
};
use crate::manager::{repository::ManagerRepository, service::require_manager};
use crate::player::{
    repository::{PlayerOrder, PlayerRepository},
    types::PlayerFilter,
};
use crate::shared::AppError;

/// Search window size is `POOL_STEP * k` for k drawn from `POOL_STEPS`
const POOL_STEP: usize = 100;
const POOL_STEPS: std::ops::RangeInclusive<usize> = 1..=10;

/// Service for buying and opening reward packs
pub struct PackService {
    managers: Arc<dyn ManagerRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PackService {
    pub fn new(
        managers: Arc<dyn ManagerRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self { managers, players }
    }

    /// Charges the pack price and adds one random player from its range
    ///
    /// Nothing is persisted unless a player was actually drawn.
    #[instrument(skip(self))]
    pub async fn open_pack(&self, request: PackRequest) -> Result<PackResponse, AppError> {
        let pack = PackType::from_repr(request.kind)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown pack type {}", request.kind)))?;

        let mut manager = require_manager(self.managers.as_ref(), &request.manager).await?;

        if !manager.spend(pack.price()) {
            warn!(
                manager_id = %manager.id,
                balance = manager.points,
                price = pack.price(),
                "Balance too low for pack"
            );
            return Err(AppError::BadRequest(
                "check manager point to process this action".to_string(),
            ));
        }

        let (min, max) = pack.overall_range();
        let limit = rand::rng().random_range(POOL_STEPS) * POOL_STEP;
        let pool = self
            .players
            .search_players(&PlayerFilter::overall_between(min, max), PlayerOrder::Natural, limit)
            .await?;

        if pool.is_empty() {
            warn!(pack = %pack, "No catalog players in pack range");
            return Err(AppError::NotFound(format!(
                "No players available for {} pack",
                pack
            )));
        }

        let index = rand::rng().random_range(0..pool.len());
        let player = pool[index].clone();
        manager.add_player(player.clone());

        self.managers.update_manager(&manager).await?;

        info!(
            manager_id = %manager.id,
            pack = %pack,
            player_id = %player.id,
            balance = manager.points,
            "Pack opened"
        );

        Ok(PackResponse {
            message: format!(
                "Drew {} (#{} of {} players)",
                player.name,
                index + 1,
                pool.len()
            ),
            point: manager.points,
            player,
        })
    }
}
