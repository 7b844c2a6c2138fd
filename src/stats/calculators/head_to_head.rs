use crate::gamelog::{GameLogIndex, PlayerId, TeamId};
use crate::markets::MarketDefinition;

use super::super::{CalculationContext, HitRateCalculator, HitRateResult, StatsError};
use super::total::tally;

/// Every full game the player has logged against one opponent.
pub struct HeadToHeadCalculator {
    opponent_team_id: TeamId,
}

impl HeadToHeadCalculator {
    pub fn new(opponent_team_id: TeamId) -> Self {
        Self { opponent_team_id }
    }
}

impl HitRateCalculator for HeadToHeadCalculator {
    fn calculate(&self, context: &CalculationContext) -> Result<HitRateResult, StatsError> {
        let games = context
            .index
            .games_against(context.player_id, self.opponent_team_id);
        tally(context, &games)
    }

    fn name(&self) -> &'static str {
        "HeadToHeadCalculator"
    }
}

pub fn h2h_hit_rate(
    index: &GameLogIndex,
    player_id: PlayerId,
    market: &MarketDefinition,
    line: f64,
    opponent_team_id: TeamId,
) -> Result<HitRateResult, StatsError> {
    let context = CalculationContext::new(index, player_id, market, line);
    HeadToHeadCalculator::new(opponent_team_id).calculate(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{assert_close, points_market, GameLogBuilder};

    const CELTICS: TeamId = 1610612738;
    const KNICKS: TeamId = 1610612752;

    #[test]
    fn uses_every_game_against_the_opponent() {
        let index = GameLogBuilder::new(1)
            .against(CELTICS)
            .recent_points(&[31.0, 18.0])
            .against(KNICKS)
            .recent_points(&[40.0, 40.0, 40.0])
            .against(CELTICS)
            .recent_points(&[26.0])
            .build();

        let result = h2h_hit_rate(&index, 1, &points_market(), 25.5, CELTICS).unwrap();
        assert_eq!(result.games_considered(), 3);
        assert_eq!(result.hits(), Some(2));
        assert_close(result.average().unwrap(), 25.0);
        assert_eq!(result.hit_rate(result.games_considered()), Some(2.0 / 3.0));
    }

    #[test]
    fn no_matchups_is_unknown() {
        let index = GameLogBuilder::new(1)
            .against(KNICKS)
            .recent_points(&[22.0])
            .build();

        let result = h2h_hit_rate(&index, 1, &points_market(), 20.0, CELTICS).unwrap();
        assert_eq!(result.games_considered(), 0);
        assert_eq!(result.hits(), None);
        assert_eq!(result.average(), None);
    }
}
