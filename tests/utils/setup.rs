use axum::Router;
use std::sync::Arc;

use fut_manager::{
    create_app,
    manager::repository::InMemoryManagerRepository,
    player::{
        cache::InMemoryPlayerCache, models::Player, repository::InMemoryPlayerRepository,
    },
    result::repository::InMemoryResultRepository,
    season::repository::InMemorySeasonRepository,
    AppState,
};

use super::catalog::default_catalog;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub player_cache: Arc<InMemoryPlayerCache>,
    pub result_repository: Arc<InMemoryResultRepository>,
}

pub struct TestSetupBuilder {
    players: Vec<Player>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: default_catalog(),
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn build(self) -> TestSetup {
        let player_cache = Arc::new(InMemoryPlayerCache::new());
        let result_repository = Arc::new(InMemoryResultRepository::new());

        let state = AppState::new(
            Arc::new(InMemoryPlayerRepository::with_players(self.players)),
            player_cache.clone(),
            Arc::new(InMemoryManagerRepository::new()),
            Arc::new(InMemorySeasonRepository::new()),
            result_repository.clone(),
        );

        TestSetup {
            app: create_app(state),
            player_cache,
            result_repository,
        }
    }
}
