use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::gamelog::{PlayerId, TeamId};
use crate::markets::{MarketError, MarketKey, MarketTable};
use crate::players::{team_id_by_abbreviation, PlayerDirectory};
use crate::props::models::{BookmakerQuote, PropRequest};
use crate::stats::Outcome;

pub const PROJECTION_BOOKMAKER: &str = "prizepicks";
pub const PROJECTION_ODDS: i32 = -137;

/// One bookmaker outcome from an odds feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsOutcome {
    pub event_id: String,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub bookmaker_key: String,
    pub market_key: String,
    /// "Over" or "Under"
    pub name: String,
    /// Player name
    pub description: String,
    pub point: f64,
    pub price: i32,
}

/// A first-half projection from a pick'em provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionLine {
    pub player_name: String,
    pub stat_type: String,
    pub line_score: f64,
    /// Leads with the opponent abbreviation, e.g. "LAL 1H"
    pub description: String,
}

type PropKey = (String, PlayerId, TeamId, u64, MarketKey);

/// Turns provider lines into prop requests the aggregator can consume.
pub struct LineCollector<'a> {
    markets: &'a MarketTable,
    players: &'a dyn PlayerDirectory,
}

impl<'a> LineCollector<'a> {
    pub fn new(markets: &'a MarketTable, players: &'a dyn PlayerDirectory) -> Self {
        Self { markets, players }
    }

    /// Groups outcomes sharing (event, player, opponent, line, market) into one request.
    #[instrument(skip(self, outcomes), fields(outcomes = outcomes.len()))]
    pub fn collect_odds(&self, outcomes: &[OddsOutcome]) -> Result<Vec<PropRequest>, MarketError> {
        let mut requests: Vec<PropRequest> = Vec::new();
        let mut positions: HashMap<PropKey, usize> = HashMap::new();

        for outcome in outcomes {
            let Some(player_id) = self.single_player(&outcome.description) else {
                continue;
            };

            let Some(opponent_team_id) = self.opponent_of(player_id, outcome) else {
                warn!(
                    player_id,
                    event_id = %outcome.event_id,
                    "Player is on neither team of the event, skipping"
                );
                continue;
            };

            let market = self.markets.resolve(&outcome.market_key)?.key;

            let side = match outcome.name.parse::<Outcome>() {
                Ok(side) => side,
                Err(_) => {
                    warn!(outcome_name = %outcome.name, "Unknown outcome name, skipping");
                    continue;
                }
            };

            let quote = BookmakerQuote {
                bookmaker_key: outcome.bookmaker_key.clone(),
                outcome: side,
                odds: outcome.price,
            };

            let key = (
                outcome.event_id.clone(),
                player_id,
                opponent_team_id,
                outcome.point.to_bits(),
                market,
            );

            match positions.get(&key) {
                Some(&position) => requests[position].quotes.push(quote),
                None => {
                    positions.insert(key, requests.len());
                    requests.push(
                        PropRequest::new(player_id, opponent_team_id, market, outcome.point)
                            .with_event(outcome.event_id.clone())
                            .with_quote(quote),
                    );
                }
            }
        }

        debug!(requests = requests.len(), "Collected odds lines");
        Ok(requests)
    }

    /// One request per projection, priced at the provider's fixed odds on both sides.
    #[instrument(skip(self, lines, event_for_team), fields(lines = lines.len()))]
    pub fn collect_projections<F>(
        &self,
        lines: &[ProjectionLine],
        event_for_team: F,
    ) -> Result<Vec<PropRequest>, MarketError>
    where
        F: Fn(TeamId) -> Option<String>,
    {
        let mut requests = Vec::with_capacity(lines.len());

        for line in lines {
            let Some(player_id) = self.single_player(&line.player_name) else {
                continue;
            };

            let abbreviation = line.description.split(' ').next().unwrap_or_default();
            let Some(opponent_team_id) = team_id_by_abbreviation(abbreviation) else {
                warn!(
                    description = %line.description,
                    "Unknown opponent abbreviation, skipping"
                );
                continue;
            };

            let market = self.markets.resolve(&format!("1H {}", line.stat_type))?.key;

            let mut request =
                PropRequest::new(player_id, opponent_team_id, market, line.line_score);
            request.event_id = event_for_team(opponent_team_id);

            for side in [Outcome::Over, Outcome::Under] {
                request = request.with_quote(BookmakerQuote {
                    bookmaker_key: PROJECTION_BOOKMAKER.to_string(),
                    outcome: side,
                    odds: PROJECTION_ODDS,
                });
            }

            requests.push(request);
        }

        debug!(requests = requests.len(), "Collected projection lines");
        Ok(requests)
    }

    fn single_player(&self, name: &str) -> Option<PlayerId> {
        match self.players.resolve_player_ids(name).as_slice() {
            [player_id] => Some(*player_id),
            ids => {
                debug!(
                    player = name,
                    matches = ids.len(),
                    "Player name did not resolve to one id"
                );
                None
            }
        }
    }

    fn opponent_of(&self, player_id: PlayerId, outcome: &OddsOutcome) -> Option<TeamId> {
        let team_id = self.players.team_of(player_id)?;
        if team_id == outcome.home_team_id {
            Some(outcome.away_team_id)
        } else if team_id == outcome.away_team_id {
            Some(outcome.home_team_id)
        } else {
            None
        }
    }
}
