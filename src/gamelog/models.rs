use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub type PlayerId = i64;
pub type TeamId = i64;

/// 0 = full game, 1-4 = quarters, 5+ = overtime periods.
pub type Period = u8;

pub const FULL_GAME: Period = 0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum SeasonType {
    #[strum(serialize = "Regular Season")]
    #[serde(rename = "Regular Season")]
    RegularSeason,
    #[strum(serialize = "IST")]
    #[serde(rename = "IST")]
    InSeasonTournament,
    #[strum(serialize = "PlayIn")]
    #[serde(rename = "PlayIn")]
    PlayIn,
    #[strum(serialize = "Playoffs")]
    #[serde(rename = "Playoffs")]
    Playoffs,
}

/// Traditional box score columns a market can reference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatName {
    MinutesPlayed,
    FieldGoalsMade,
    FieldGoalsAttempted,
    FieldGoalPercentage,
    ThreePointFieldGoalsMade,
    ThreePointFieldGoalsAttempted,
    ThreePointFieldGoalPercentage,
    FreeThrowsMade,
    FreeThrowsAttempted,
    FreeThrowPercentage,
    OffensiveRebounds,
    DefensiveRebounds,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    BlockAttempts,
    Turnovers,
    PersonalFouls,
    PersonalFoulsDrawn,
    Points,
    PlusMinus,
    NbaFantasyPoints,
}

/// One box score row for a player in a single period of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub opponent_team_id: TeamId,
    pub season_year: String,
    pub season_type: SeasonType,
    pub game_id: String,
    pub game_date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub stats: HashMap<StatName, f64>,
}

impl GameRecord {
    pub fn stat(&self, stat: StatName) -> Option<f64> {
        self.stats.get(&stat).copied()
    }

    pub fn is_full_game(&self) -> bool {
        self.period == FULL_GAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn stat_names_round_trip_through_their_column_names() {
        for stat in StatName::iter() {
            assert_eq!(StatName::from_str(stat.as_ref()).unwrap(), stat);
        }
        assert_eq!(
            StatName::ThreePointFieldGoalsMade.as_ref(),
            "three_point_field_goals_made"
        );
        assert_eq!(StatName::NbaFantasyPoints.as_ref(), "nba_fantasy_points");
    }

    #[test]
    fn season_types_use_provider_labels() {
        assert_eq!(
            SeasonType::from_str("Regular Season").unwrap(),
            SeasonType::RegularSeason
        );
        assert_eq!(SeasonType::InSeasonTournament.to_string(), "IST");
        assert!(SeasonType::from_str("Preseason").is_err());
    }

    #[test]
    fn deserializes_record_with_stat_map() {
        let json = r#"{
            "player_id": 2544,
            "team_id": 1610612747,
            "opponent_team_id": 1610612744,
            "season_year": "2024-25",
            "season_type": "Regular Season",
            "game_id": "0022400061",
            "game_date": "2024-10-22",
            "period": 0,
            "stats": {"points": 16.0, "rebounds": 5.0}
        }"#;

        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_full_game());
        assert_eq!(record.stat(StatName::Points), Some(16.0));
        assert_eq!(record.stat(StatName::Assists), None);
        assert_eq!(
            record.game_date,
            NaiveDate::from_ymd_opt(2024, 10, 22).unwrap()
        );
    }
}
