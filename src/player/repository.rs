use async_trait::async_trait;
use sqlx::{types::Json, PgPool, Postgres, QueryBuilder};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::{models::Player, types::PlayerFilter};
use crate::shared::AppError;

/// Ordering applied to catalog searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOrder {
    /// Highest overall rating first
    OverallDesc,
    /// Whatever order the store keeps the catalog in
    Natural,
}

/// Trait for read access to the player catalog
#[async_trait]
pub trait PlayerRepository {
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError>;

    /// Returns players matching the filter; a `limit` of 0 means no limit
    async fn search_players(
        &self,
        filter: &PlayerFilter,
        order: PlayerOrder,
        limit: usize,
    ) -> Result<Vec<Player>, AppError>;
}

/// In-memory player catalog for development and testing
pub struct InMemoryPlayerRepository {
    players: Mutex<Vec<Player>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            players: Mutex::new(Vec::new()),
        }
    }

    /// Creates a catalog with pre-populated players, kept in the given order
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: Mutex::new(players),
        }
    }

    /// Loads a catalog from a JSON file holding an array of player documents
    pub fn from_catalog_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            warn!(error = %e, path = %path.display(), "Failed to read player catalog");
            AppError::DatabaseError(format!("Failed to read player catalog: {}", e))
        })?;
        let players: Vec<Player> = serde_json::from_str(&raw).map_err(|e| {
            warn!(error = %e, path = %path.display(), "Failed to parse player catalog");
            AppError::DatabaseError(format!("Failed to parse player catalog: {}", e))
        })?;

        info!(player_count = players.len(), path = %path.display(), "Player catalog loaded");
        Ok(Self::with_players(players))
    }

    pub fn player_count(&self) -> usize {
        self.players.lock().unwrap().len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError> {
        debug!(player_id = %player_id, "Fetching player from memory");

        let players = self.players.lock().unwrap();
        Ok(players.iter().find(|p| p.id == player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn search_players(
        &self,
        filter: &PlayerFilter,
        order: PlayerOrder,
        limit: usize,
    ) -> Result<Vec<Player>, AppError> {
        let players = self.players.lock().unwrap();
        let mut matched: Vec<Player> = players
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        if order == PlayerOrder::OverallDesc {
            matched.sort_by(|a, b| b.overall.cmp(&a.overall));
        }
        if limit > 0 {
            matched.truncate(limit);
        }

        debug!(match_count = matched.len(), "Player search completed in memory");
        Ok(matched)
    }
}

/// PostgreSQL implementation: catalog documents live in a JSONB column
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Substring pattern for ILIKE with the needle's wildcards taken literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_text_filter(builder: &mut QueryBuilder<'_, Postgres>, field: &str, needle: &str) {
    if needle.is_empty() {
        return;
    }
    builder
        .push(format!(" AND doc->>'{}' ILIKE ", field))
        .push_bind(like_pattern(needle))
        .push(" ESCAPE '\\'");
}

fn push_range_filter(builder: &mut QueryBuilder<'_, Postgres>, field: &str, bounds: &[u32]) {
    match bounds {
        [min, max] => {
            builder
                .push(format!(" AND (doc->>'{}')::int BETWEEN ", field))
                .push_bind(*min as i32)
                .push(" AND ")
                .push_bind(*max as i32);
        }
        [exact] => {
            builder
                .push(format!(" AND (doc->>'{}')::int = ", field))
                .push_bind(*exact as i32);
        }
        _ => {}
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError> {
        debug!(player_id = %player_id, "Fetching player from database");

        let row: Option<(Json<Player>,)> = sqlx::query_as("SELECT doc FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_id = %player_id, "Failed to fetch player from database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(|(Json(player),)| player))
    }

    #[instrument(skip(self))]
    async fn search_players(
        &self,
        filter: &PlayerFilter,
        order: PlayerOrder,
        limit: usize,
    ) -> Result<Vec<Player>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT doc FROM players WHERE TRUE");

        push_text_filter(&mut builder, "long_name", &filter.name);
        push_text_filter(&mut builder, "club_name", &filter.club);
        push_text_filter(&mut builder, "league_name", &filter.league);
        push_text_filter(&mut builder, "nationality_name", &filter.nationality);
        push_text_filter(&mut builder, "player_positions", &filter.position);
        push_range_filter(&mut builder, "age", &filter.age);
        push_range_filter(&mut builder, "overall", &filter.overall);
        push_range_filter(&mut builder, "potential", &filter.potential);

        if order == PlayerOrder::OverallDesc {
            builder.push(" ORDER BY (doc->>'overall')::int DESC");
        }
        if limit > 0 {
            builder.push(" LIMIT ").push_bind(limit as i64);
        }

        let rows: Vec<(Json<Player>,)> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to search players in database");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!(match_count = rows.len(), "Player search completed in database");
        Ok(rows.into_iter().map(|(Json(player),)| player).collect())
    }
}
