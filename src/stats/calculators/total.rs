use crate::gamelog::{GameLogIndex, GameRecord, PlayerId};
use crate::markets::MarketDefinition;

use super::super::{CalculationContext, HitRateResult, Outcome, StatsError};

/// Market total for one of the player's games.
///
/// A component whose period row is absent (the period was not played)
/// contributes nothing. A row that exists but lacks a named stat is an error.
pub fn total_for_game(
    index: &GameLogIndex,
    player_id: PlayerId,
    game_id: &str,
    market: &MarketDefinition,
) -> Result<f64, StatsError> {
    sum_components(index, player_id, game_id, None, market)
}

/// Same as [`total_for_game`], reusing `row` for the component at its own period.
pub fn total_for_row(
    index: &GameLogIndex,
    row: &GameRecord,
    market: &MarketDefinition,
) -> Result<f64, StatsError> {
    sum_components(index, row.player_id, &row.game_id, Some(row), market)
}

fn sum_components(
    index: &GameLogIndex,
    player_id: PlayerId,
    game_id: &str,
    anchor: Option<&GameRecord>,
    market: &MarketDefinition,
) -> Result<f64, StatsError> {
    let mut total = 0.0;

    for component in &market.components {
        let period_row = match anchor {
            Some(row) if row.period == component.period => Some(row),
            _ => index.record(player_id, game_id, component.period),
        };

        let Some(period_row) = period_row else {
            continue;
        };

        for stat in &component.stats {
            total += period_row
                .stat(*stat)
                .ok_or_else(|| StatsError::MissingStat {
                    stat: *stat,
                    game_id: game_id.to_string(),
                    period: component.period,
                })?;
        }
    }

    Ok(total)
}

/// Over tally across the given games. No games means nothing is known.
pub(crate) fn tally(
    context: &CalculationContext,
    games: &[&GameRecord],
) -> Result<HitRateResult, StatsError> {
    if games.is_empty() {
        return Ok(HitRateResult::unknown(0));
    }

    let mut hits = 0;
    let mut sum = 0.0;
    for game in games {
        let total = total_for_row(context.index, game, context.market)?;
        if Outcome::Over.is_hit(total, context.line) {
            hits += 1;
        }
        sum += total;
    }

    let count = games.len() as u32;
    Ok(HitRateResult::known(count, hits, sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamelog::StatName;
    use crate::markets::{MarketComponent, MarketKey};
    use crate::shared::test_utils::{market, GameLogBuilder};

    fn first_half_points() -> MarketDefinition {
        market(
            MarketKey::FirstHalfPoints,
            vec![(1, vec![StatName::Points]), (2, vec![StatName::Points])],
        )
    }

    #[test]
    fn sums_every_stat_of_a_full_game_market() {
        let index = GameLogBuilder::new(1)
            .game_with(
                "g1",
                &[
                    (StatName::Points, 20.0),
                    (StatName::Rebounds, 7.0),
                    (StatName::Assists, 5.0),
                ],
            )
            .build();
        let pra = market(
            MarketKey::PointsReboundsAssists,
            vec![(0, vec![StatName::Points, StatName::Rebounds, StatName::Assists])],
        );

        assert_eq!(total_for_game(&index, 1, "g1", &pra).unwrap(), 32.0);
    }

    #[test]
    fn first_half_sums_both_quarters_of_the_same_game() {
        let index = GameLogBuilder::new(1)
            .game_with("g1", &[(StatName::Points, 30.0)])
            .period("g1", 1, &[(StatName::Points, 8.0)])
            .period("g1", 2, &[(StatName::Points, 6.0)])
            .period("g1", 3, &[(StatName::Points, 9.0)])
            .game_with("g2", &[(StatName::Points, 12.0)])
            .period("g2", 1, &[(StatName::Points, 2.0)])
            .build();

        assert_eq!(
            total_for_game(&index, 1, "g1", &first_half_points()).unwrap(),
            14.0
        );
    }

    #[test]
    fn absent_period_contributes_zero() {
        let index = GameLogBuilder::new(1)
            .game_with("g1", &[(StatName::Points, 30.0)])
            .period("g1", 1, &[(StatName::Points, 8.0)])
            .build();

        assert_eq!(
            total_for_game(&index, 1, "g1", &first_half_points()).unwrap(),
            8.0
        );
    }

    #[test]
    fn row_and_game_lookups_agree() {
        let index = GameLogBuilder::new(1)
            .game_with("g1", &[(StatName::Points, 30.0)])
            .period("g1", 1, &[(StatName::Points, 8.0)])
            .period("g1", 2, &[(StatName::Points, 5.0)])
            .build();
        let row = index.record(1, "g1", 0).unwrap();

        assert_eq!(
            total_for_row(&index, row, &first_half_points()).unwrap(),
            total_for_game(&index, 1, "g1", &first_half_points()).unwrap()
        );
    }

    #[test]
    fn component_order_does_not_change_the_total() {
        let index = GameLogBuilder::new(1)
            .game_with(
                "g1",
                &[
                    (StatName::Blocks, 2.0),
                    (StatName::Steals, 3.0),
                    (StatName::Points, 11.0),
                ],
            )
            .period("g1", 1, &[(StatName::Points, 4.0)])
            .build();
        let forward = market(
            MarketKey::BlocksSteals,
            vec![
                (0, vec![StatName::Blocks, StatName::Steals]),
                (1, vec![StatName::Points]),
            ],
        );
        let reversed = MarketDefinition {
            components: vec![
                MarketComponent {
                    period: 1,
                    stats: vec![StatName::Points],
                },
                MarketComponent {
                    period: 0,
                    stats: vec![StatName::Steals, StatName::Blocks],
                },
            ],
            ..forward.clone()
        };

        assert_eq!(
            total_for_game(&index, 1, "g1", &forward).unwrap(),
            total_for_game(&index, 1, "g1", &reversed).unwrap()
        );
    }

    #[test]
    fn missing_stat_in_present_row_is_an_error() {
        let index = GameLogBuilder::new(1)
            .game_with("g1", &[(StatName::Points, 30.0)])
            .build();
        let rebounds = market(MarketKey::Rebounds, vec![(0, vec![StatName::Rebounds])]);

        let result = total_for_game(&index, 1, "g1", &rebounds);
        assert!(matches!(
            result,
            Err(StatsError::MissingStat {
                stat: StatName::Rebounds,
                period: 0,
                ..
            })
        ));
    }

    #[test]
    fn unknown_game_totals_zero() {
        let index = GameLogBuilder::new(1).build();
        let points = market(MarketKey::Points, vec![(0, vec![StatName::Points])]);

        assert_eq!(total_for_game(&index, 1, "nope", &points).unwrap(), 0.0);
    }
}
