use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gamelog::{PlayerId, TeamId};
use crate::markets::MarketKey;
use crate::stats::{HitRateResult, Outcome};

/// One bookmaker price for one side of a prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmakerQuote {
    pub bookmaker_key: String,
    pub outcome: Outcome,
    pub odds: i32, // American odds
}

/// A (player, market, line) proposition to build analytics for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropRequest {
    #[serde(default)]
    pub event_id: Option<String>,
    pub player_id: PlayerId,
    pub opponent_team_id: TeamId,
    pub market: MarketKey,
    pub line: f64,
    #[serde(default)]
    pub alternate: bool,
    #[serde(default)]
    pub quotes: Vec<BookmakerQuote>,
}

impl PropRequest {
    pub fn new(player_id: PlayerId, opponent_team_id: TeamId, market: MarketKey, line: f64) -> Self {
        Self {
            event_id: None,
            player_id,
            opponent_team_id,
            market,
            line,
            alternate: market.is_alternate(),
            quotes: Vec::new(),
        }
    }

    pub fn with_event(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn with_quote(mut self, quote: BookmakerQuote) -> Self {
        self.quotes.push(quote);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    pub window: u32,
    pub hits: Option<u32>,
    pub hit_rate: Option<f64>,
    pub average: Option<f64>,
}

impl WindowStats {
    /// Rolling windows divide by the window size, not by games found
    pub fn from_result(window: u32, result: &HitRateResult) -> Self {
        Self {
            window,
            hits: result.hits(),
            hit_rate: result.hit_rate(window),
            average: result.average(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitStats {
    pub games: u32,
    pub hits: Option<u32>,
    pub hit_rate: Option<f64>,
    pub average: Option<f64>,
}

impl SplitStats {
    pub fn from_result(result: &HitRateResult) -> Self {
        Self {
            games: result.games_considered(),
            hits: result.hits(),
            hit_rate: result.hit_rate(result.games_considered()),
            average: result.average(),
        }
    }
}

/// Fully populated analytics for one side of a prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropRecord {
    pub id: String,
    pub event_id: Option<String>,
    pub player_id: PlayerId,
    pub opponent_team_id: TeamId,
    pub market: MarketKey,
    pub outcome: Outcome,
    pub line: f64,
    pub alternate: bool,
    pub windows: Vec<WindowStats>,
    pub season: SplitStats,
    pub head_to_head: SplitStats,
    pub hot_streak: Option<u32>,
    pub quotes: Vec<BookmakerQuote>,
}

impl PropRecord {
    pub fn new_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    pub fn window(&self, window: u32) -> Option<&WindowStats> {
        self.windows.iter().find(|stats| stats.window == window)
    }
}
