use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::{
    cache::PlayerCache,
    models::Player,
    repository::{PlayerOrder, PlayerRepository},
    types::{PlayerFilter, PlayersResponse, CACHE_KEY_PREFIX},
};
use crate::shared::AppError;

/// Unfiltered searches never return more rows than this
pub const ALL_PLAYER_LIMIT: usize = 3000;

/// How long a random-draw pool survives in the cache
pub const RANDOM_POOL_TTL: Duration = Duration::from_secs(45 * 60);

/// Overall rating window for the "top players" listing
pub const TOP_PLAYER_OVERALL: (u32, u32) = (87, 99);

pub fn top_players_key() -> String {
    format!("{}top", CACHE_KEY_PREFIX)
}

/// Service for catalog queries, fronted by the player cache
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
    cache: Arc<dyn PlayerCache + Send + Sync>,
}

impl PlayerService {
    pub fn new(
        repository: Arc<dyn PlayerRepository + Send + Sync>,
        cache: Arc<dyn PlayerCache + Send + Sync>,
    ) -> Self {
        Self { repository, cache }
    }

    /// Highest rated players; cached without expiry once computed
    #[instrument(skip(self))]
    pub async fn top_players(&self) -> Result<PlayersResponse, AppError> {
        let key = top_players_key();

        let players = match self.cache.get(&key).await? {
            Some(players) => players,
            None => {
                let (min, max) = TOP_PLAYER_OVERALL;
                let players = self
                    .repository
                    .search_players(
                        &PlayerFilter::overall_between(min, max),
                        PlayerOrder::OverallDesc,
                        0,
                    )
                    .await?;
                self.cache.set(&key, &players, None).await?;
                info!(player_count = players.len(), "Top players cached");
                players
            }
        };

        Ok(PlayersResponse {
            count: players.len(),
            players,
        })
    }

    /// Uncached catalog search
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &PlayerFilter) -> Result<PlayersResponse, AppError> {
        let players = self.fresh_search(filter).await?;
        debug!(player_count = players.len(), "Catalog search finished");

        Ok(PlayersResponse {
            count: players.len(),
            players,
        })
    }

    /// Draws one player from the filter's pool without replacement
    ///
    /// The pool shrinks by one per draw and lives in the cache for
    /// `RANDOM_POOL_TTL`; the response count is the remaining pool size.
    #[instrument(skip(self))]
    pub async fn random_player(&self, filter: &PlayerFilter) -> Result<PlayersResponse, AppError> {
        let key = filter.cache_key();

        let mut pool = match self.cache.get(&key).await? {
            Some(pool) => pool,
            None => self.fresh_search(filter).await?,
        };

        if pool.is_empty() {
            return Err(AppError::NotFound(
                "No players left in the pool for this filter".to_string(),
            ));
        }

        let index = rand::rng().random_range(0..pool.len());
        let drawn = pool.remove(index);

        self.cache.set(&key, &pool, Some(RANDOM_POOL_TTL)).await?;

        info!(
            player_id = %drawn.id,
            player_name = %drawn.name,
            remaining = pool.len(),
            "Random player drawn"
        );

        Ok(PlayersResponse {
            count: pool.len(),
            players: vec![drawn],
        })
    }

    /// Drops every cached pool, including the top players listing
    #[instrument(skip(self))]
    pub async fn clean_cache(&self) -> Result<u64, AppError> {
        let removed = self.cache.clear().await?;
        info!(removed, "Player cache cleaned");
        Ok(removed)
    }

    async fn fresh_search(&self, filter: &PlayerFilter) -> Result<Vec<Player>, AppError> {
        let limit = if filter.is_unfiltered() {
            ALL_PLAYER_LIMIT
        } else {
            0
        };

        self.repository
            .search_players(filter, PlayerOrder::OverallDesc, limit)
            .await
    }
}
