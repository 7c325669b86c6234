// Public API - what other modules can use
pub use handlers::{clean_cache, random_player, search_players, top_players};

// Internal modules
pub mod cache;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
