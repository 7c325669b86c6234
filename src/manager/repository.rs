use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::Manager;
use crate::result::models::MatchResult;
use crate::shared::AppError;

/// Trait for manager repository operations
#[async_trait]
pub trait ManagerRepository {
    async fn create_manager(&self, manager: &Manager) -> Result<(), AppError>;
    async fn get_manager(&self, manager_id: &str) -> Result<Option<Manager>, AppError>;
    async fn list_managers(&self) -> Result<Vec<Manager>, AppError>;
    /// Replaces the stored document with `manager`, keeping the stored
    /// results. Results only change through `append_result`.
    async fn update_manager(&self, manager: &Manager) -> Result<(), AppError>;
    /// Appends `result` to the stored manager's results in one step
    async fn append_result(&self, manager_id: &str, result: &MatchResult) -> Result<(), AppError>;
}

/// In-memory implementation of ManagerRepository for development and testing
pub struct InMemoryManagerRepository {
    managers: Mutex<HashMap<String, Manager>>,
}

impl Default for InMemoryManagerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryManagerRepository {
    pub fn new() -> Self {
        Self {
            managers: Mutex::new(HashMap::new()),
        }
    }

    pub fn manager_count(&self) -> usize {
        self.managers.lock().unwrap().len()
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    #[instrument(skip(self, manager))]
    async fn create_manager(&self, manager: &Manager) -> Result<(), AppError> {
        debug!(manager_id = %manager.id, name = %manager.name, "Creating manager in memory");

        let mut managers = self.managers.lock().unwrap();
        if managers.contains_key(&manager.id) {
            warn!(manager_id = %manager.id, "Manager already exists in memory");
            return Err(AppError::DatabaseError(
                "Manager already exists".to_string(),
            ));
        }
        managers.insert(manager.id.clone(), manager.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_manager(&self, manager_id: &str) -> Result<Option<Manager>, AppError> {
        let managers = self.managers.lock().unwrap();
        let manager = managers.get(manager_id).cloned();

        if manager.is_none() {
            debug!(manager_id = %manager_id, "Manager not found in memory");
        }
        Ok(manager)
    }

    #[instrument(skip(self))]
    async fn list_managers(&self) -> Result<Vec<Manager>, AppError> {
        let managers = self.managers.lock().unwrap();
        let mut list: Vec<Manager> = managers.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    #[instrument(skip(self, manager))]
    async fn update_manager(&self, manager: &Manager) -> Result<(), AppError> {
        debug!(manager_id = %manager.id, "Updating manager in memory");

        let mut managers = self.managers.lock().unwrap();
        let Some(existing) = managers.get_mut(&manager.id) else {
            warn!(manager_id = %manager.id, "Manager not found for update in memory");
            return Err(AppError::NotFound("Manager not found".to_string()));
        };
        let results = std::mem::take(&mut existing.results);
        *existing = Manager {
            results,
            ..manager.clone()
        };
        Ok(())
    }

    #[instrument(skip(self, result))]
    async fn append_result(&self, manager_id: &str, result: &MatchResult) -> Result<(), AppError> {
        let mut managers = self.managers.lock().unwrap();
        let Some(manager) = managers.get_mut(manager_id) else {
            warn!(manager_id = %manager_id, "Manager not found for result append in memory");
            return Err(AppError::NotFound("Manager not found".to_string()));
        };
        manager.add_result(result.clone());
        debug!(manager_id = %manager_id, result_id = %result.id, "Result appended to manager in memory");
        Ok(())
    }
}

/// PostgreSQL implementation storing each manager as a JSONB document
pub struct PostgresManagerRepository {
    pool: PgPool,
}

impl PostgresManagerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagerRepository for PostgresManagerRepository {
    #[instrument(skip(self, manager))]
    async fn create_manager(&self, manager: &Manager) -> Result<(), AppError> {
        debug!(manager_id = %manager.id, name = %manager.name, "Creating manager in database");

        sqlx::query("INSERT INTO managers (id, doc) VALUES ($1, $2)")
            .bind(&manager.id)
            .bind(Json(manager))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create manager in database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_manager(&self, manager_id: &str) -> Result<Option<Manager>, AppError> {
        let row: Option<(Json<Manager>,)> =
            sqlx::query_as("SELECT doc FROM managers WHERE id = $1")
                .bind(manager_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    warn!(error = %e, manager_id = %manager_id, "Failed to fetch manager from database");
                    AppError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(|(Json(manager),)| manager))
    }

    #[instrument(skip(self))]
    async fn list_managers(&self) -> Result<Vec<Manager>, AppError> {
        let rows: Vec<(Json<Manager>,)> =
            sqlx::query_as("SELECT doc FROM managers ORDER BY doc->>'created_at'")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to list managers from database");
                    AppError::DatabaseError(e.to_string())
                })?;

        Ok(rows.into_iter().map(|(Json(manager),)| manager).collect())
    }

    #[instrument(skip(self, manager))]
    async fn update_manager(&self, manager: &Manager) -> Result<(), AppError> {
        debug!(manager_id = %manager.id, "Updating manager in database");

        let result = sqlx::query(
            "UPDATE managers \
             SET doc = $2::jsonb || jsonb_build_object('results', COALESCE(doc->'results', '[]'::jsonb)) \
             WHERE id = $1",
        )
        .bind(&manager.id)
        .bind(Json(manager))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, manager_id = %manager.id, "Failed to update manager in database");
            AppError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            warn!(manager_id = %manager.id, "Manager not found for update");
            return Err(AppError::NotFound("Manager not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, result))]
    async fn append_result(&self, manager_id: &str, result: &MatchResult) -> Result<(), AppError> {
        let outcome = sqlx::query(
            "UPDATE managers \
             SET doc = jsonb_set(doc, '{results}', COALESCE(doc->'results', '[]'::jsonb) || jsonb_build_array($2::jsonb)) \
             WHERE id = $1",
        )
        .bind(manager_id)
        .bind(Json(result))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, manager_id = %manager_id, "Failed to append result to manager in database");
            AppError::DatabaseError(e.to_string())
        })?;

        if outcome.rows_affected() == 0 {
            warn!(manager_id = %manager_id, "Manager not found for result append");
            return Err(AppError::NotFound("Manager not found".to_string()));
        }
        Ok(())
    }
}
