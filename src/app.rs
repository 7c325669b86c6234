use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::shared::AppState;
use crate::{manager, pack, player, result, season};

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            AUTHORIZATION,
        ])
}

/// Builds the full HTTP router over the given state
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/player", get(player::top_players))
        .route("/player/search", post(player::search_players))
        .route("/player/random", post(player::random_player))
        .route("/cache/clean", get(player::clean_cache))
        // Managers
        .route(
            "/manager",
            post(manager::create_manager).get(manager::list_managers),
        )
        .route("/manager/player", post(manager::manage_players))
        .route("/manager/point", post(manager::manage_points))
        // Seasons and results
        .route("/season", post(season::create_season).get(season::list_seasons))
        .route("/statistics", post(season::get_statistics))
        .route("/result", post(result::record_result))
        .route("/pack", post(pack::open_pack))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
