use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::Season;
use crate::result::models::MatchResult;
use crate::shared::AppError;

/// Trait for season repository operations
#[async_trait]
pub trait SeasonRepository {
    async fn create_season(&self, season: &Season) -> Result<(), AppError>;
    async fn get_season(&self, season_id: &str) -> Result<Option<Season>, AppError>;
    async fn list_seasons(&self) -> Result<Vec<Season>, AppError>;
    /// Appends `result` to the stored season's results in one step
    async fn append_result(&self, season_id: &str, result: &MatchResult) -> Result<(), AppError>;
}

/// In-memory implementation of SeasonRepository for development and testing
pub struct InMemorySeasonRepository {
    seasons: Mutex<HashMap<String, Season>>,
}

impl Default for InMemorySeasonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySeasonRepository {
    pub fn new() -> Self {
        Self {
            seasons: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the repository with existing seasons
    pub fn with_seasons(seasons: Vec<Season>) -> Self {
        let map = seasons.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            seasons: Mutex::new(map),
        }
    }
}

#[async_trait]
impl SeasonRepository for InMemorySeasonRepository {
    #[instrument(skip(self, season))]
    async fn create_season(&self, season: &Season) -> Result<(), AppError> {
        debug!(season_id = %season.id, title = %season.title, "Creating season in memory");

        let mut seasons = self.seasons.lock().unwrap();
        if seasons.contains_key(&season.id) {
            warn!(season_id = %season.id, "Season already exists in memory");
            return Err(AppError::DatabaseError("Season already exists".to_string()));
        }
        seasons.insert(season.id.clone(), season.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_season(&self, season_id: &str) -> Result<Option<Season>, AppError> {
        let seasons = self.seasons.lock().unwrap();
        Ok(seasons.get(season_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_seasons(&self) -> Result<Vec<Season>, AppError> {
        let seasons = self.seasons.lock().unwrap();
        let mut list: Vec<Season> = seasons.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    #[instrument(skip(self, result))]
    async fn append_result(&self, season_id: &str, result: &MatchResult) -> Result<(), AppError> {
        let mut seasons = self.seasons.lock().unwrap();
        let Some(season) = seasons.get_mut(season_id) else {
            warn!(season_id = %season_id, "Season not found for result append in memory");
            return Err(AppError::NotFound("Season not found".to_string()));
        };
        season.add_result(result.clone());
        debug!(season_id = %season_id, result_count = season.results.len(), "Season updated in memory");
        Ok(())
    }
}

/// PostgreSQL implementation storing each season as a JSONB document
pub struct PostgresSeasonRepository {
    pool: PgPool,
}

impl PostgresSeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeasonRepository for PostgresSeasonRepository {
    #[instrument(skip(self, season))]
    async fn create_season(&self, season: &Season) -> Result<(), AppError> {
        sqlx::query("INSERT INTO seasons (id, doc) VALUES ($1, $2)")
            .bind(&season.id)
            .bind(Json(season))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create season in database");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!(season_id = %season.id, "Season stored in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_season(&self, season_id: &str) -> Result<Option<Season>, AppError> {
        let row: Option<(Json<Season>,)> = sqlx::query_as("SELECT doc FROM seasons WHERE id = $1")
            .bind(season_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, season_id = %season_id, "Failed to fetch season from database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(|(Json(season),)| season))
    }

    #[instrument(skip(self))]
    async fn list_seasons(&self) -> Result<Vec<Season>, AppError> {
        let rows: Vec<(Json<Season>,)> =
            sqlx::query_as("SELECT doc FROM seasons ORDER BY doc->>'created_at'")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to list seasons from database");
                    AppError::DatabaseError(e.to_string())
                })?;

        Ok(rows.into_iter().map(|(Json(season),)| season).collect())
    }

    #[instrument(skip(self, result))]
    async fn append_result(&self, season_id: &str, result: &MatchResult) -> Result<(), AppError> {
        let outcome = sqlx::query(
            "UPDATE seasons \
             SET doc = jsonb_set(doc, '{results}', COALESCE(doc->'results', '[]'::jsonb) || jsonb_build_array($2::jsonb)) \
             WHERE id = $1",
        )
        .bind(season_id)
        .bind(Json(result))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, season_id = %season_id, "Failed to append result to season in database");
            AppError::DatabaseError(e.to_string())
        })?;

        if outcome.rows_affected() == 0 {
            warn!(season_id = %season_id, "Season not found for result append");
            return Err(AppError::NotFound("Season not found".to_string()));
        }
        Ok(())
    }
}
