pub mod actions;
pub mod catalog;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use catalog::catalog_player;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
