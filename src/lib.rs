// Library crate for the FUT manager service
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod manager;
pub mod pack;
pub mod player;
pub mod result;
pub mod season;
pub mod shared;
pub mod standings;

// Re-export commonly used types for easier access in tests
pub use app::create_app;
pub use shared::{AppError, AppState};
pub use standings::{compute_scorers, compute_standings, SeasonStatistics};
