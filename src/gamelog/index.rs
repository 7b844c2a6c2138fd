use std::collections::HashMap;

use tracing::{debug, warn};

use super::models::{GameRecord, Period, PlayerId, TeamId, FULL_GAME};

/// Immutable in-memory snapshot of every box score row for an analytics session.
///
/// Rows are grouped per (player, period) and ordered most recent first, so
/// calculators can walk a player's history without re-sorting.
#[derive(Debug, Default)]
pub struct GameLogIndex {
    records: Vec<GameRecord>,
    by_player_period: HashMap<(PlayerId, Period), Vec<usize>>,
    by_game: HashMap<(PlayerId, String, Period), usize>,
}

impl GameLogIndex {
    pub fn load(records: Vec<GameRecord>) -> Self {
        let mut kept: Vec<GameRecord> = Vec::with_capacity(records.len());
        let mut by_game = HashMap::with_capacity(records.len());

        for record in records {
            let key = (record.player_id, record.game_id.clone(), record.period);
            if by_game.contains_key(&key) {
                warn!(
                    player_id = record.player_id,
                    game_id = %record.game_id,
                    period = record.period,
                    "Duplicate game log row, keeping the first one"
                );
                continue;
            }
            by_game.insert(key, kept.len());
            kept.push(record);
        }

        let mut by_player_period: HashMap<(PlayerId, Period), Vec<usize>> = HashMap::new();
        for (position, record) in kept.iter().enumerate() {
            by_player_period
                .entry((record.player_id, record.period))
                .or_default()
                .push(position);
        }

        for positions in by_player_period.values_mut() {
            positions.sort_by(|a, b| {
                let (a, b) = (&kept[*a], &kept[*b]);
                b.game_date
                    .cmp(&a.game_date)
                    .then_with(|| b.game_id.cmp(&a.game_id))
            });
        }

        debug!(
            rows = kept.len(),
            groups = by_player_period.len(),
            "Game log index built"
        );

        Self {
            records: kept,
            by_player_period,
            by_game,
        }
    }

    /// A player's rows for one period, most recent game first.
    pub fn records_for(
        &self,
        player_id: PlayerId,
        period: Period,
    ) -> impl Iterator<Item = &GameRecord> + '_ {
        self.by_player_period
            .get(&(player_id, period))
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |position| &self.records[*position])
    }

    pub fn record(&self, player_id: PlayerId, game_id: &str, period: Period) -> Option<&GameRecord> {
        self.by_game
            .get(&(player_id, game_id.to_string(), period))
            .map(|position| &self.records[*position])
    }

    pub fn full_games(&self, player_id: PlayerId) -> Vec<&GameRecord> {
        self.records_for(player_id, FULL_GAME).collect()
    }

    pub fn games_against(&self, player_id: PlayerId, opponent_team_id: TeamId) -> Vec<&GameRecord> {
        self.records_for(player_id, FULL_GAME)
            .filter(|record| record.opponent_team_id == opponent_team_id)
            .collect()
    }

    pub fn games_in_season(&self, player_id: PlayerId, season_year: &str) -> Vec<&GameRecord> {
        self.records_for(player_id, FULL_GAME)
            .filter(|record| record.season_year == season_year)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn player_count(&self) -> usize {
        let mut players: Vec<PlayerId> = self.records.iter().map(|r| r.player_id).collect();
        players.sort_unstable();
        players.dedup();
        players.len()
    }
}
