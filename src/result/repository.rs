use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::MatchResult;
use crate::shared::AppError;

/// Trait for result repository operations
#[async_trait]
pub trait ResultRepository {
    async fn create_result(&self, result: &MatchResult) -> Result<(), AppError>;
}

/// In-memory implementation of ResultRepository for development and testing
pub struct InMemoryResultRepository {
    results: Mutex<HashMap<String, MatchResult>>,
}

impl Default for InMemoryResultRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(HashMap::new()),
        }
    }

    pub fn result_count(&self) -> usize {
        self.results.lock().unwrap().len()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    #[instrument(skip(self, result))]
    async fn create_result(&self, result: &MatchResult) -> Result<(), AppError> {
        let mut results = self.results.lock().unwrap();
        if results.contains_key(&result.id) {
            warn!(result_id = %result.id, "Result already exists in memory");
            return Err(AppError::DatabaseError("Result already exists".to_string()));
        }
        results.insert(result.id.clone(), result.clone());
        debug!(result_id = %result.id, "Result stored in memory");
        Ok(())
    }
}

/// PostgreSQL implementation storing each result as a JSONB document
pub struct PostgresResultRepository {
    pool: PgPool,
}

impl PostgresResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for PostgresResultRepository {
    #[instrument(skip(self, result))]
    async fn create_result(&self, result: &MatchResult) -> Result<(), AppError> {
        sqlx::query("INSERT INTO results (id, doc) VALUES ($1, $2)")
            .bind(&result.id)
            .bind(Json(result))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, result_id = %result.id, "Failed to create result in database");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!(result_id = %result.id, "Result stored in database");
        Ok(())
    }
}
