use crate::gamelog::{GameLogIndex, PlayerId};
use crate::markets::MarketDefinition;

use super::super::{CalculationContext, HitRateCalculator, HitRateResult, StatsError};
use super::total::tally;

pub struct SeasonCalculator {
    season_year: String,
}

impl SeasonCalculator {
    pub fn new(season_year: impl Into<String>) -> Self {
        Self {
            season_year: season_year.into(),
        }
    }
}

impl HitRateCalculator for SeasonCalculator {
    fn calculate(&self, context: &CalculationContext) -> Result<HitRateResult, StatsError> {
        let games = context
            .index
            .games_in_season(context.player_id, &self.season_year);
        tally(context, &games)
    }

    fn name(&self) -> &'static str {
        "SeasonCalculator"
    }
}

pub fn season_hit_rate(
    index: &GameLogIndex,
    player_id: PlayerId,
    market: &MarketDefinition,
    line: f64,
    season_year: &str,
) -> Result<HitRateResult, StatsError> {
    let context = CalculationContext::new(index, player_id, market, line);
    SeasonCalculator::new(season_year).calculate(&context)
}
