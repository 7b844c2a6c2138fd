use crate::gamelog::{GameLogIndex, PlayerId, FULL_GAME};
use crate::markets::MarketDefinition;

use super::super::{CalculationContext, Outcome, StatsError};
use super::total::total_for_row;

/// Current run of consecutive hits, walking back from the most recent game.
/// `None` when the player has no games.
pub struct HotStreakCalculator {
    outcome: Outcome,
}

impl Default for HotStreakCalculator {
    fn default() -> Self {
        Self::new(Outcome::Over)
    }
}

impl HotStreakCalculator {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome }
    }

    pub fn calculate(&self, context: &CalculationContext) -> Result<Option<u32>, StatsError> {
        let mut games = context
            .index
            .records_for(context.player_id, FULL_GAME)
            .peekable();

        if games.peek().is_none() {
            return Ok(None);
        }

        let mut streak = 0;
        for game in games {
            let total = total_for_row(context.index, game, context.market)?;
            if !self.outcome.is_hit(total, context.line) {
                break;
            }
            streak += 1;
        }

        Ok(Some(streak))
    }
}

pub fn hot_streak(
    index: &GameLogIndex,
    player_id: PlayerId,
    market: &MarketDefinition,
    line: f64,
) -> Result<Option<u32>, StatsError> {
    let context = CalculationContext::new(index, player_id, market, line);
    HotStreakCalculator::default().calculate(&context)
}
