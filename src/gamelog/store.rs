use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::{errors::GameLogError, index::GameLogIndex, repository::GameLogRepository};

/// Holds the current game log snapshot.
///
/// A reload builds the replacement index completely before swapping it in;
/// readers that already hold a snapshot keep using it unchanged.
pub struct GameLogStore {
    current: RwLock<Arc<GameLogIndex>>,
}

impl Default for GameLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLogStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(GameLogIndex::default())),
        }
    }

    pub async fn snapshot(&self) -> Arc<GameLogIndex> {
        self.current.read().await.clone()
    }

    #[instrument(skip(self, repository))]
    pub async fn reload(
        &self,
        repository: &dyn GameLogRepository,
    ) -> Result<Arc<GameLogIndex>, GameLogError> {
        let records = repository.load_all().await?;
        let index = Arc::new(GameLogIndex::load(records));

        let mut guard = self.current.write().await;
        *guard = index.clone();

        info!(
            rows = index.len(),
            players = index.player_count(),
            "Game log snapshot replaced"
        );
        Ok(index)
    }
}
