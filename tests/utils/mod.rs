pub mod game_log_builders;
pub mod setup;

// Re-export main utilities for use by test files
pub use game_log_builders::PlayerHistory;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder, CELTICS, CURRY, JAMES, LAKERS, WARRIORS};
