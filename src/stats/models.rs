use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
pub enum Outcome {
    Over,
    Under,
}

impl Outcome {
    /// Over hits strictly exceed the line; Under hits are games that fail to exceed it.
    pub fn is_hit(&self, total: f64, line: f64) -> bool {
        match self {
            Outcome::Over => total > line,
            Outcome::Under => total <= line,
        }
    }
}

/// How Under records derive their hit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnderHitPolicy {
    /// Under records reuse the Over tallies unchanged.
    #[default]
    MirrorOver,
    /// Under hits are the games that did not exceed the line.
    Complement,
}

/// Aggregate over a set of games. `hits` and `average` are both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitRateResult {
    games_considered: u32,
    hits: Option<u32>,
    average: Option<f64>,
}

impl HitRateResult {
    pub fn unknown(games_considered: u32) -> Self {
        Self {
            games_considered,
            hits: None,
            average: None,
        }
    }

    pub fn known(games_considered: u32, hits: u32, average: f64) -> Self {
        Self {
            games_considered,
            hits: Some(hits.min(games_considered)),
            average: Some(average),
        }
    }

    pub fn games_considered(&self) -> u32 {
        self.games_considered
    }

    pub fn hits(&self) -> Option<u32> {
        self.hits
    }

    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn is_known(&self) -> bool {
        self.hits.is_some()
    }

    pub fn hit_rate(&self, denominator: u32) -> Option<f64> {
        match self.hits {
            Some(hits) if denominator > 0 => Some(hits as f64 / denominator as f64),
            _ => None,
        }
    }

    /// Same games, counting the ones that missed instead of the ones that hit
    pub fn complement(&self) -> Self {
        Self {
            games_considered: self.games_considered,
            hits: self.hits.map(|hits| self.games_considered - hits),
            average: self.average,
        }
    }
}
