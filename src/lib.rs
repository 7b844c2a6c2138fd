// Library crate for the prop hit-rate engine
// This file exposes the public API for the batch binary and integration tests

pub mod config;
pub mod gamelog;
pub mod markets;
pub mod players;
pub mod props;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::{Config, GameLogSource};
pub use gamelog::{
    GameLogIndex, GameLogRepository, GameLogStore, GameRecord, InMemoryGameLogRepository,
    PostgresGameLogRepository,
};
pub use markets::{MarketDefinition, MarketKey, MarketTable};
pub use players::{InMemoryPlayerDirectory, PlayerDirectory, PlayerProfile};
pub use props::{LineCollector, PropRecord, PropRequest};
pub use shared::AppError;
pub use stats::{BatchReport, Outcome, PropAggregator, UnderHitPolicy};
