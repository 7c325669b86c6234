// Public API - what other modules can use
pub use handlers::open_pack;

mod handlers;
pub mod models;
pub mod service;
pub mod types;
