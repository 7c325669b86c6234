// Public API - what other modules can use
pub use handlers::record_result;

mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
