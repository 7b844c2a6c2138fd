use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::gamelog::{Period, StatName};

/// Market identifiers as the line providers spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
pub enum MarketKey {
    #[strum(serialize = "player_points")]
    Points,
    #[strum(serialize = "player_points_q1")]
    PointsFirstQuarter,
    #[strum(serialize = "player_rebounds")]
    Rebounds,
    #[strum(serialize = "player_rebounds_q1")]
    ReboundsFirstQuarter,
    #[strum(serialize = "player_assists")]
    Assists,
    #[strum(serialize = "player_assists_q1")]
    AssistsFirstQuarter,
    #[strum(serialize = "player_threes")]
    Threes,
    #[strum(serialize = "player_blocks")]
    Blocks,
    #[strum(serialize = "player_steals")]
    Steals,
    #[strum(serialize = "player_blocks_steals")]
    BlocksSteals,
    #[strum(serialize = "player_turnovers")]
    Turnovers,
    #[strum(serialize = "player_points_rebounds_assists")]
    PointsReboundsAssists,
    #[strum(serialize = "player_points_rebounds")]
    PointsRebounds,
    #[strum(serialize = "player_points_assists")]
    PointsAssists,
    #[strum(serialize = "player_rebounds_assists")]
    ReboundsAssists,
    #[strum(serialize = "player_field_goals")]
    FieldGoals,
    #[strum(serialize = "player_frees_made")]
    FreeThrowsMade,
    #[strum(serialize = "player_frees_attempts")]
    FreeThrowsAttempted,
    #[strum(serialize = "player_points_alternate")]
    PointsAlternate,
    #[strum(serialize = "player_rebounds_alternate")]
    ReboundsAlternate,
    #[strum(serialize = "player_assists_alternate")]
    AssistsAlternate,
    #[strum(serialize = "player_blocks_alternate")]
    BlocksAlternate,
    #[strum(serialize = "player_steals_alternate")]
    StealsAlternate,
    #[strum(serialize = "player_turnovers_alternate")]
    TurnoversAlternate,
    #[strum(serialize = "player_threes_alternate")]
    ThreesAlternate,
    #[strum(serialize = "player_points_assists_alternate")]
    PointsAssistsAlternate,
    #[strum(serialize = "player_points_rebounds_alternate")]
    PointsReboundsAlternate,
    #[strum(serialize = "player_rebounds_assists_alternate")]
    ReboundsAssistsAlternate,
    #[strum(serialize = "player_points_rebounds_assists_alternate")]
    PointsReboundsAssistsAlternate,
    #[strum(serialize = "1H Points")]
    FirstHalfPoints,
    #[strum(serialize = "1H Pts+Rebs+Asts")]
    FirstHalfPointsReboundsAssists,
    #[strum(serialize = "1H Fantasy Score")]
    FirstHalfFantasyScore,
}

impl MarketKey {
    pub fn is_alternate(&self) -> bool {
        self.as_ref().contains("alternate")
    }
}

impl Serialize for MarketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for MarketKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MarketKey::from_str(&raw)
            .map_err(|_| serde::de::Error::custom(format!("unknown market '{}'", raw)))
    }
}

/// Stats summed from one period of a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketComponent {
    pub period: Period,
    pub stats: Vec<StatName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDefinition {
    pub key: MarketKey,
    pub label: String,
    pub components: Vec<MarketComponent>,
}

impl MarketDefinition {
    pub fn is_alternate(&self) -> bool {
        self.key.is_alternate()
    }

    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.components.iter().map(|component| component.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn market_keys_parse_provider_spellings() {
        assert_eq!(
            MarketKey::from_str("player_points_rebounds_assists").unwrap(),
            MarketKey::PointsReboundsAssists
        );
        assert_eq!(
            MarketKey::from_str("1H Fantasy Score").unwrap(),
            MarketKey::FirstHalfFantasyScore
        );
        assert!(MarketKey::from_str("player_double_double").is_err());
    }

    #[test]
    fn alternate_flag_follows_the_key() {
        assert!(MarketKey::ThreesAlternate.is_alternate());
        assert!(!MarketKey::Threes.is_alternate());
        let alternates = MarketKey::iter().filter(MarketKey::is_alternate).count();
        assert_eq!(alternates, 11);
    }

    #[test]
    fn serializes_as_provider_string() {
        let json = serde_json::to_string(&MarketKey::FirstHalfPoints).unwrap();
        assert_eq!(json, "\"1H Points\"");

        let key: MarketKey = serde_json::from_str("\"player_blocks_steals\"").unwrap();
        assert_eq!(key, MarketKey::BlocksSteals);
        assert!(serde_json::from_str::<MarketKey>("\"player_dunks\"").is_err());
    }
}
