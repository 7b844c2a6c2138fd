mod errors;
pub mod index;
pub mod models;
pub mod repository;
pub mod store;

pub use errors::GameLogError;
pub use index::GameLogIndex;
pub use models::*;
pub use repository::{GameLogRepository, InMemoryGameLogRepository, PostgresGameLogRepository};
pub use store::GameLogStore;
