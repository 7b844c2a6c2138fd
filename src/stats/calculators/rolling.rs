use crate::gamelog::{GameLogIndex, GameRecord, PlayerId, FULL_GAME};
use crate::markets::MarketDefinition;

use super::super::{CalculationContext, HitRateCalculator, HitRateResult, StatsError};
use super::total::tally;

/// Hit rate over the player's most recent `window` games.
pub struct RollingWindowCalculator {
    window: u32,
}

impl RollingWindowCalculator {
    pub fn new(window: u32) -> Self {
        Self { window }
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}

impl HitRateCalculator for RollingWindowCalculator {
    fn calculate(&self, context: &CalculationContext) -> Result<HitRateResult, StatsError> {
        if self.window == 0 {
            return Err(StatsError::Validation(
                "rolling window must cover at least one game".to_string(),
            ));
        }

        let games: Vec<&GameRecord> = context
            .index
            .records_for(context.player_id, FULL_GAME)
            .take(self.window as usize)
            .collect();

        // Partial windows are never reported
        if games.len() < self.window as usize {
            return Ok(HitRateResult::unknown(games.len() as u32));
        }

        tally(context, &games)
    }

    fn name(&self) -> &'static str {
        "RollingWindowCalculator"
    }
}

pub fn last_n_games_hit_rate(
    index: &GameLogIndex,
    player_id: PlayerId,
    market: &MarketDefinition,
    line: f64,
    n: u32,
) -> Result<HitRateResult, StatsError> {
    let context = CalculationContext::new(index, player_id, market, line);
    RollingWindowCalculator::new(n).calculate(&context)
}
