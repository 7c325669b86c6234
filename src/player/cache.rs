use async_trait::async_trait;
use redis::AsyncCommands;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::{models::Player, types::CACHE_KEY_PREFIX};
use crate::shared::AppError;

/// Key-value cache for player pools (top players, random-draw pools)
#[async_trait]
pub trait PlayerCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Player>>, AppError>;

    /// Stores a pool under `key`; `None` keeps it until the cache is cleared
    async fn set(
        &self,
        key: &str,
        players: &[Player],
        ttl: Option<Duration>,
    ) -> Result<(), AppError>;

    /// Removes every cached pool and returns how many were removed
    async fn clear(&self) -> Result<u64, AppError>;
}

struct CacheEntry {
    players: Vec<Player>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-memory cache for development and testing
#[derive(Default)]
pub struct InMemoryPlayerCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl InMemoryPlayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_key(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(Instant::now()))
    }
}

#[async_trait]
impl PlayerCache for InMemoryPlayerCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Vec<Player>>, AppError> {
        let mut entries = self.entries.lock().unwrap();

        let expired = match entries.get(key) {
            Some(entry) if entry.is_expired(Instant::now()) => true,
            Some(entry) => {
                debug!(key = %key, pool_size = entry.players.len(), "Cache hit in memory");
                return Ok(Some(entry.players.clone()));
            }
            None => false,
        };

        if expired {
            debug!(key = %key, "Cache entry expired in memory");
            entries.remove(key);
        }
        Ok(None)
    }

    #[instrument(skip(self, players))]
    async fn set(
        &self,
        key: &str,
        players: &[Player],
        ttl: Option<Duration>,
    ) -> Result<(), AppError> {
        debug!(key = %key, pool_size = players.len(), "Storing pool in memory cache");

        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            CacheEntry {
                players: players.to_vec(),
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
            },
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, AppError> {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len() as u64;
        entries.clear();

        debug!(removed, "Memory cache cleared");
        Ok(removed)
    }
}

/// Redis-backed cache; pools are stored as JSON strings
#[derive(Clone)]
pub struct RedisPlayerCache {
    client: redis::Client,
}

impl RedisPlayerCache {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    pub fn from_url(redis_url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(redis_url).map_err(|e| {
            warn!(error = %e, "Failed to create Redis client");
            AppError::CacheError(e.to_string())
        })?;
        info!("Redis client created successfully");
        Ok(Self::new(client))
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to get Redis connection");
                AppError::CacheError(e.to_string())
            })
    }
}

fn cache_error(e: redis::RedisError) -> AppError {
    warn!(error = %e, "Redis command failed");
    AppError::CacheError(e.to_string())
}

#[async_trait]
impl PlayerCache for RedisPlayerCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Vec<Player>>, AppError> {
        let mut conn = self.connection().await?;
        let cached: Option<String> = conn.get(key).await.map_err(cache_error)?;

        match cached {
            Some(json) => {
                let players: Vec<Player> = serde_json::from_str(&json).map_err(|e| {
                    warn!(error = %e, key = %key, "Failed to decode cached pool");
                    AppError::CacheError(e.to_string())
                })?;
                debug!(key = %key, pool_size = players.len(), "Cache hit in Redis");
                Ok(Some(players))
            }
            None => {
                debug!(key = %key, "Cache miss in Redis");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, players))]
    async fn set(
        &self,
        key: &str,
        players: &[Player],
        ttl: Option<Duration>,
    ) -> Result<(), AppError> {
        let json = serde_json::to_string(players).map_err(|e| {
            warn!(error = %e, key = %key, "Failed to encode pool for cache");
            AppError::CacheError(e.to_string())
        })?;

        let mut conn = self.connection().await?;
        match ttl {
            Some(ttl) => conn
                .set_ex::<_, _, ()>(key, json, ttl.as_secs() as usize)
                .await
                .map_err(cache_error)?,
            None => conn.set::<_, _, ()>(key, json).await.map_err(cache_error)?,
        }

        debug!(key = %key, pool_size = players.len(), "Pool stored in Redis");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, AppError> {
        let mut conn = self.connection().await?;
        let keys: Vec<String> = conn
            .keys(format!("{}*", CACHE_KEY_PREFIX))
            .await
            .map_err(cache_error)?;

        if keys.is_empty() {
            return Ok(0);
        }

        let removed: u64 = conn.del(&keys).await.map_err(cache_error)?;
        info!(removed, "Redis player pools cleared");
        Ok(removed)
    }
}
