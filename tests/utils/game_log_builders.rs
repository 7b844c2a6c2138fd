use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use propstats::gamelog::{
    GameRecord, Period, PlayerId, SeasonType, StatName, TeamId, FULL_GAME,
};

// ============================================================================
// Game Log Builders
// ============================================================================

/// One player's box score history, built oldest game first.
pub struct PlayerHistory {
    player_id: PlayerId,
    team_id: TeamId,
    opponent_team_id: TeamId,
    season_year: String,
    day: u64,
    records: Vec<GameRecord>,
}

impl PlayerHistory {
    pub fn new(player_id: PlayerId, team_id: TeamId) -> Self {
        Self {
            player_id,
            team_id,
            opponent_team_id: 0,
            season_year: "2024-25".to_string(),
            day: 0,
            records: vec![],
        }
    }

    pub fn against(mut self, opponent_team_id: TeamId) -> Self {
        self.opponent_team_id = opponent_team_id;
        self
    }

    pub fn in_season(mut self, season_year: &str) -> Self {
        self.season_year = season_year.to_string();
        self
    }

    /// Adds a game with full-game points, rebounds, assists plus two first-half quarters
    pub fn game(mut self, points: f64, rebounds: f64, assists: f64, halves: [f64; 2]) -> Self {
        self.day += 1;
        let game_id = format!("{}-{:03}", self.player_id, self.day);
        let date = NaiveDate::from_ymd_opt(2024, 10, 22)
            .and_then(|start| start.checked_add_days(Days::new(self.day)))
            .unwrap();

        self.push(
            &game_id,
            FULL_GAME,
            date,
            &[
                (StatName::Points, points),
                (StatName::Rebounds, rebounds),
                (StatName::Assists, assists),
            ],
        );
        self.push(&game_id, 1, date, &[(StatName::Points, halves[0])]);
        self.push(&game_id, 2, date, &[(StatName::Points, halves[1])]);
        self
    }

    /// Adds full-game points only, oldest first
    pub fn points(mut self, totals: &[f64]) -> Self {
        for total in totals {
            self = self.game(*total, 0.0, 0.0, [0.0, 0.0]);
        }
        self
    }

    pub fn records(self) -> Vec<GameRecord> {
        self.records
    }

    fn push(&mut self, game_id: &str, period: Period, date: NaiveDate, stats: &[(StatName, f64)]) {
        self.records.push(GameRecord {
            player_id: self.player_id,
            team_id: self.team_id,
            opponent_team_id: self.opponent_team_id,
            season_year: self.season_year.clone(),
            season_type: SeasonType::RegularSeason,
            game_id: game_id.to_string(),
            game_date: date,
            period,
            stats: stats.iter().copied().collect::<HashMap<_, _>>(),
        });
    }
}
