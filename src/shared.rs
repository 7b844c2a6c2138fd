use thiserror::Error;

use crate::gamelog::GameLogError;
use crate::markets::MarketError;
use crate::stats::StatsError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Markets(#[from] MarketError),

    #[error(transparent)]
    GameLog(#[from] GameLogError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
