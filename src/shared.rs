use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::manager::repository::ManagerRepository;
use crate::player::cache::PlayerCache;
use crate::player::repository::PlayerRepository;
use crate::result::repository::ResultRepository;
use crate::season::repository::SeasonRepository;
use crate::standings::StandingsError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub player_cache: Arc<dyn PlayerCache + Send + Sync>,
    pub manager_repository: Arc<dyn ManagerRepository + Send + Sync>,
    pub season_repository: Arc<dyn SeasonRepository + Send + Sync>,
    pub result_repository: Arc<dyn ResultRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        player_cache: Arc<dyn PlayerCache + Send + Sync>,
        manager_repository: Arc<dyn ManagerRepository + Send + Sync>,
        season_repository: Arc<dyn SeasonRepository + Send + Sync>,
        result_repository: Arc<dyn ResultRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            player_cache,
            manager_repository,
            season_repository,
            result_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal server error")]
    Internal,
}

impl From<StandingsError> for AppError {
    fn from(err: StandingsError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::CacheError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Cache error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "code": status.as_u16(),
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::manager::repository::InMemoryManagerRepository;
    use crate::player::cache::InMemoryPlayerCache;
    use crate::player::models::Player;
    use crate::player::repository::InMemoryPlayerRepository;
    use crate::result::repository::InMemoryResultRepository;
    use crate::season::repository::InMemorySeasonRepository;

    /// Builds a catalog player with the fields the tests care about
    pub fn catalog_player(id: &str, name: &str, overall: u32) -> Player {
        Player {
            id: id.to_string(),
            long_name: format!("{} Long", name),
            name: name.to_string(),
            positions: "ST, CF".to_string(),
            club: "Test FC".to_string(),
            league: "Test League".to_string(),
            nationality: "Testland".to_string(),
            age: 25,
            overall,
            potential: overall,
            face_url: format!("https://cdn.example/{}.png", id),
            ..Player::default()
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        player_repository: Option<Arc<dyn PlayerRepository + Send + Sync>>,
        player_cache: Option<Arc<dyn PlayerCache + Send + Sync>>,
        manager_repository: Option<Arc<dyn ManagerRepository + Send + Sync>>,
        season_repository: Option<Arc<dyn SeasonRepository + Send + Sync>>,
        result_repository: Option<Arc<dyn ResultRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                player_repository: None,
                player_cache: None,
                manager_repository: None,
                season_repository: None,
                result_repository: None,
            }
        }

        pub fn with_players(mut self, players: Vec<Player>) -> Self {
            self.player_repository = Some(Arc::new(InMemoryPlayerRepository::with_players(
                players,
            )));
            self
        }

        pub fn with_player_cache(mut self, cache: Arc<dyn PlayerCache + Send + Sync>) -> Self {
            self.player_cache = Some(cache);
            self
        }

        pub fn with_manager_repository(
            mut self,
            repo: Arc<dyn ManagerRepository + Send + Sync>,
        ) -> Self {
            self.manager_repository = Some(repo);
            self
        }

        pub fn with_season_repository(
            mut self,
            repo: Arc<dyn SeasonRepository + Send + Sync>,
        ) -> Self {
            self.season_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                player_repository: self
                    .player_repository
                    .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new())),
                player_cache: self
                    .player_cache
                    .unwrap_or_else(|| Arc::new(InMemoryPlayerCache::new())),
                manager_repository: self
                    .manager_repository
                    .unwrap_or_else(|| Arc::new(InMemoryManagerRepository::new())),
                season_repository: self
                    .season_repository
                    .unwrap_or_else(|| Arc::new(InMemorySeasonRepository::new())),
                result_repository: self
                    .result_repository
                    .unwrap_or_else(|| Arc::new(InMemoryResultRepository::new())),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
