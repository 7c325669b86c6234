// Public API - what other modules can use
pub use handlers::{create_manager, list_managers, manage_players, manage_points};

mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
