// Public API - what other modules can use
pub use handlers::{create_season, get_statistics, list_seasons};

mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
