use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::gamelog::GameLogIndex;
use crate::markets::MarketTable;
use crate::props::{PropRecord, PropRequest, SplitStats, WindowStats};

use super::{
    calculators::{
        HeadToHeadCalculator, HotStreakCalculator, RollingWindowCalculator, SeasonCalculator,
    },
    CalculationContext, HitRateCalculator, HitRateResult, Outcome, StatsError, UnderHitPolicy,
    DEFAULT_SEASON, DEFAULT_WINDOWS,
};

/// Runs every calculator for a prop and assembles one record per outcome.
pub struct PropAggregator {
    markets: Arc<MarketTable>,
    windows: Vec<RollingWindowCalculator>,
    season: SeasonCalculator,
    current_season: String,
    outcomes: Vec<Outcome>,
    under_policy: UnderHitPolicy,
}

/// Results of a batch run. A failing request never stops the others.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<PropRecord>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub request: PropRequest,
    pub error: StatsError,
}

struct PropTallies {
    windows: Vec<(u32, HitRateResult)>,
    season: HitRateResult,
    head_to_head: HitRateResult,
    hot_streak: Option<u32>,
}

impl PropAggregator {
    pub fn builder(markets: Arc<MarketTable>) -> PropAggregatorBuilder {
        PropAggregatorBuilder::new(markets)
    }

    pub fn windows(&self) -> Vec<u32> {
        self.windows.iter().map(|w| w.window()).collect()
    }

    pub fn current_season(&self) -> &str {
        &self.current_season
    }

    #[instrument(
        skip(self, index, request),
        fields(player_id = request.player_id, market = %request.market, line = request.line)
    )]
    pub fn aggregate(
        &self,
        index: &GameLogIndex,
        request: &PropRequest,
    ) -> Result<Vec<PropRecord>, StatsError> {
        let market = self.markets.definition(request.market)?;
        let context = CalculationContext::new(index, request.player_id, market, request.line);

        let over = self.tally(&context, request, Outcome::Over)?;
        let under = if self.outcomes.contains(&Outcome::Under) {
            Some(self.under_tallies(&context, &over)?)
        } else {
            None
        };

        let records: Vec<PropRecord> = self
            .outcomes
            .iter()
            .map(|outcome| {
                let tallies = match (outcome, &under) {
                    (Outcome::Under, Some(under)) => under,
                    _ => &over,
                };
                Self::build_record(request, *outcome, tallies)
            })
            .collect();

        debug!(records = records.len(), "Prop aggregated");
        Ok(records)
    }

    #[instrument(skip_all, fields(requests = requests.len()))]
    pub fn aggregate_batch(&self, index: &GameLogIndex, requests: &[PropRequest]) -> BatchReport {
        let mut report = BatchReport::default();

        for request in requests {
            match self.aggregate(index, request) {
                Ok(records) => report.records.extend(records),
                Err(err) => {
                    error!(
                        ?err,
                        player_id = request.player_id,
                        market = %request.market,
                        "Failed to aggregate prop, skipping"
                    );
                    report.failures.push(BatchFailure {
                        request: request.clone(),
                        error: err,
                    });
                }
            }
        }

        info!(
            records = report.records.len(),
            failures = report.failures.len(),
            "Prop batch aggregated"
        );
        report
    }

    fn tally(
        &self,
        context: &CalculationContext,
        request: &PropRequest,
        outcome: Outcome,
    ) -> Result<PropTallies, StatsError> {
        let windows = self
            .windows
            .iter()
            .map(|calculator| {
                let result = calculator.calculate(context)?;
                debug!(
                    calculator = calculator.name(),
                    window = calculator.window(),
                    known = result.is_known(),
                    "Window tallied"
                );
                Ok((calculator.window(), result))
            })
            .collect::<Result<Vec<_>, StatsError>>()?;

        Ok(PropTallies {
            windows,
            season: self.season.calculate(context)?,
            head_to_head: HeadToHeadCalculator::new(request.opponent_team_id)
                .calculate(context)?,
            hot_streak: HotStreakCalculator::new(outcome).calculate(context)?,
        })
    }

    fn under_tallies(
        &self,
        context: &CalculationContext,
        over: &PropTallies,
    ) -> Result<PropTallies, StatsError> {
        match self.under_policy {
            UnderHitPolicy::MirrorOver => Ok(PropTallies {
                windows: over.windows.clone(),
                season: over.season,
                head_to_head: over.head_to_head,
                hot_streak: over.hot_streak,
            }),
            UnderHitPolicy::Complement => Ok(PropTallies {
                windows: over
                    .windows
                    .iter()
                    .map(|(window, result)| (*window, result.complement()))
                    .collect(),
                season: over.season.complement(),
                head_to_head: over.head_to_head.complement(),
                hot_streak: HotStreakCalculator::new(Outcome::Under).calculate(context)?,
            }),
        }
    }

    fn build_record(request: &PropRequest, outcome: Outcome, tallies: &PropTallies) -> PropRecord {
        PropRecord {
            id: PropRecord::new_id(),
            event_id: request.event_id.clone(),
            player_id: request.player_id,
            opponent_team_id: request.opponent_team_id,
            market: request.market,
            outcome,
            line: request.line,
            alternate: request.alternate,
            windows: tallies
                .windows
                .iter()
                .map(|(window, result)| WindowStats::from_result(*window, result))
                .collect(),
            season: SplitStats::from_result(&tallies.season),
            head_to_head: SplitStats::from_result(&tallies.head_to_head),
            hot_streak: tallies.hot_streak,
            quotes: request
                .quotes
                .iter()
                .filter(|quote| quote.outcome == outcome)
                .cloned()
                .collect(),
        }
    }
}

pub struct PropAggregatorBuilder {
    markets: Arc<MarketTable>,
    windows: Vec<u32>,
    current_season: String,
    outcomes: Vec<Outcome>,
    under_policy: UnderHitPolicy,
}

impl PropAggregatorBuilder {
    fn new(markets: Arc<MarketTable>) -> Self {
        Self {
            markets,
            windows: DEFAULT_WINDOWS.to_vec(),
            current_season: DEFAULT_SEASON.to_string(),
            outcomes: vec![Outcome::Over, Outcome::Under],
            under_policy: UnderHitPolicy::default(),
        }
    }

    pub fn with_windows(mut self, windows: Vec<u32>) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_current_season(mut self, season: impl Into<String>) -> Self {
        self.current_season = season.into();
        self
    }

    pub fn with_outcomes(mut self, outcomes: Vec<Outcome>) -> Self {
        self.outcomes = outcomes;
        self
    }

    pub fn with_under_policy(mut self, policy: UnderHitPolicy) -> Self {
        self.under_policy = policy;
        self
    }

    pub fn build(self) -> Result<PropAggregator, StatsError> {
        if self.windows.is_empty() {
            return Err(StatsError::Validation(
                "at least one rolling window is required".to_string(),
            ));
        }
        if self.windows.contains(&0) {
            return Err(StatsError::Validation(
                "rolling windows must cover at least one game".to_string(),
            ));
        }
        if self.outcomes.is_empty() {
            return Err(StatsError::Validation(
                "at least one outcome is required".to_string(),
            ));
        }

        Ok(PropAggregator {
            markets: self.markets,
            windows: self
                .windows
                .into_iter()
                .map(RollingWindowCalculator::new)
                .collect(),
            season: SeasonCalculator::new(self.current_season.clone()),
            current_season: self.current_season,
            outcomes: self.outcomes,
            under_policy: self.under_policy,
        })
    }
}
