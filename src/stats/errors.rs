use thiserror::Error;

use crate::gamelog::{Period, StatName};
use crate::markets::MarketError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Market error: {0}")]
    Market(#[from] MarketError),

    #[error("Game {game_id} period {period} has no '{stat}' value")]
    MissingStat {
        stat: StatName,
        game_id: String,
        period: Period,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}
