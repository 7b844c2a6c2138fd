pub mod calculators;
pub mod service;

mod errors;
pub mod models;

pub use calculators::{
    h2h_hit_rate, hot_streak, last_n_games_hit_rate, season_hit_rate, total_for_game,
    HeadToHeadCalculator, HotStreakCalculator, RollingWindowCalculator, SeasonCalculator,
};
pub use errors::StatsError;
pub use models::*;
pub use service::{BatchFailure, BatchReport, PropAggregator, PropAggregatorBuilder};

use crate::gamelog::{GameLogIndex, PlayerId};
use crate::markets::MarketDefinition;

/// Window sizes reported on every prop record unless overridden.
pub const DEFAULT_WINDOWS: [u32; 4] = [5, 10, 20, 30];

pub const DEFAULT_SEASON: &str = "2024-25";

pub trait HitRateCalculator: Send + Sync {
    fn calculate(&self, context: &CalculationContext) -> Result<HitRateResult, StatsError>;

    fn name(&self) -> &'static str;
}

/// Everything a calculator reads: one player, one market, one line.
pub struct CalculationContext<'a> {
    pub index: &'a GameLogIndex,
    pub player_id: PlayerId,
    pub market: &'a MarketDefinition,
    pub line: f64,
}

impl<'a> CalculationContext<'a> {
    pub fn new(
        index: &'a GameLogIndex,
        player_id: PlayerId,
        market: &'a MarketDefinition,
        line: f64,
    ) -> Self {
        Self {
            index,
            player_id,
            market,
            line,
        }
    }
}
