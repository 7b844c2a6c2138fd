use std::sync::Arc;

use propstats::gamelog::{GameRecord, GameLogStore, InMemoryGameLogRepository};
use propstats::{
    GameLogIndex, InMemoryPlayerDirectory, MarketTable, PlayerProfile, PropAggregator,
    UnderHitPolicy,
};

pub const CURRY: i64 = 201939;
pub const JAMES: i64 = 2544;
pub const WARRIORS: i64 = 1610612744;
pub const LAKERS: i64 = 1610612747;
pub const CELTICS: i64 = 1610612738;

/// End-to-end wiring: repository, store, markets and aggregator
pub struct TestSetup {
    pub repository: InMemoryGameLogRepository,
    pub store: GameLogStore,
    pub markets: Arc<MarketTable>,
    pub players: InMemoryPlayerDirectory,
}

impl TestSetup {
    pub fn aggregator(&self) -> PropAggregator {
        PropAggregator::builder(self.markets.clone()).build().unwrap()
    }

    pub fn aggregator_with_policy(&self, policy: UnderHitPolicy) -> PropAggregator {
        PropAggregator::builder(self.markets.clone())
            .with_under_policy(policy)
            .build()
            .unwrap()
    }

    pub async fn reload(&self) -> Arc<GameLogIndex> {
        self.store.reload(&self.repository).await.unwrap()
    }
}

pub struct TestSetupBuilder {
    records: Vec<GameRecord>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    pub fn with_records(mut self, records: Vec<GameRecord>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> TestSetup {
        let profile = |id, name: &str, team_id| PlayerProfile {
            id,
            full_name: name.to_string(),
            team_id,
            on_roster: true,
        };

        TestSetup {
            repository: InMemoryGameLogRepository::with_records(self.records),
            store: GameLogStore::new(),
            markets: Arc::new(MarketTable::builtin().unwrap()),
            players: InMemoryPlayerDirectory::new(vec![
                profile(CURRY, "Stephen Curry", WARRIORS),
                profile(JAMES, "LeBron James", LAKERS),
            ]),
        }
    }
}
