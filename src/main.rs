use fut_manager::{
    config::{get_config, Settings},
    create_app,
    manager::repository::{InMemoryManagerRepository, ManagerRepository, PostgresManagerRepository},
    player::{
        cache::{InMemoryPlayerCache, PlayerCache, RedisPlayerCache},
        repository::{InMemoryPlayerRepository, PlayerRepository, PostgresPlayerRepository},
    },
    result::repository::{InMemoryResultRepository, PostgresResultRepository, ResultRepository},
    season::repository::{InMemorySeasonRepository, PostgresSeasonRepository, SeasonRepository},
    AppState,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Players = Arc<dyn PlayerRepository + Send + Sync>;
type Managers = Arc<dyn ManagerRepository + Send + Sync>;
type Seasons = Arc<dyn SeasonRepository + Send + Sync>;
type Results = Arc<dyn ResultRepository + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = get_config()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FUT manager server");

    let (players, managers, seasons, results) = document_store(&settings).await?;
    let cache = player_cache(&settings)?;

    let app_state = AppState::new(players, cache, managers, seasons, results);
    let app = create_app(app_state);

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects the Postgres document store once, or falls back to memory
async fn document_store(
    settings: &Settings,
) -> Result<(Players, Managers, Seasons, Results), Box<dyn std::error::Error>> {
    let Some(database_url) = settings.database_url() else {
        warn!("DATABASE_URL not set, using in-memory document store");

        let players: Players = match settings.player_catalog_path() {
            Some(path) => Arc::new(InMemoryPlayerRepository::from_catalog_file(path)?),
            None => {
                warn!("PLAYER_CATALOG_PATH not set, player catalog is empty");
                Arc::new(InMemoryPlayerRepository::new())
            }
        };

        return Ok((
            players,
            Arc::new(InMemoryManagerRepository::new()),
            Arc::new(InMemorySeasonRepository::new()),
            Arc::new(InMemoryResultRepository::new()),
        ));
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Connected to Postgres document store");

    Ok((
        Arc::new(PostgresPlayerRepository::new(pool.clone())),
        Arc::new(PostgresManagerRepository::new(pool.clone())),
        Arc::new(PostgresSeasonRepository::new(pool.clone())),
        Arc::new(PostgresResultRepository::new(pool)),
    ))
}

fn player_cache(
    settings: &Settings,
) -> Result<Arc<dyn PlayerCache + Send + Sync>, Box<dyn std::error::Error>> {
    match settings.redis_url() {
        Some(redis_url) => {
            info!("Using Redis player cache");
            Ok(Arc::new(RedisPlayerCache::from_url(redis_url)?))
        }
        None => {
            warn!("REDIS_URL not set, using in-memory player cache");
            Ok(Arc::new(InMemoryPlayerCache::new()))
        }
    }
}
