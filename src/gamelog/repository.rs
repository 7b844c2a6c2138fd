use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

use super::errors::GameLogError;
use super::models::{GameRecord, SeasonType, StatName};

/// Source of the full historical game log
#[async_trait]
pub trait GameLogRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<GameRecord>, GameLogError>;
}

/// In-memory implementation of GameLogRepository for development and testing
pub struct InMemoryGameLogRepository {
    records: Mutex<Vec<GameRecord>>,
}

impl Default for InMemoryGameLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameLogRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<GameRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Reads a JSON array of game records exported from the stats provider
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, GameLogError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<GameRecord> =
            serde_json::from_str(&text).map_err(|e| GameLogError::Decode(e.to_string()))?;
        Ok(Self::with_records(records))
    }

    /// Appends rows; they become visible on the next `load_all`
    pub fn push(&self, record: GameRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

#[async_trait]
impl GameLogRepository for InMemoryGameLogRepository {
    #[instrument(skip(self))]
    async fn load_all(&self) -> Result<Vec<GameRecord>, GameLogError> {
        let records = self
            .records
            .lock()
            .map_err(|_| GameLogError::Database("game log lock poisoned".to_string()))?
            .clone();

        debug!(rows = records.len(), "Loaded game log from memory");
        Ok(records)
    }
}

/// PostgreSQL implementation reading the traditional player box score table
pub struct PostgresGameLogRepository {
    pool: PgPool,
}

impl PostgresGameLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_statement() -> String {
        let stat_columns: Vec<String> = StatName::iter()
            .map(|stat| format!("CAST({0} AS DOUBLE PRECISION) AS {0}", stat.as_ref()))
            .collect();

        format!(
            "SELECT CAST(player_id AS BIGINT) AS player_id, CAST(team_id AS BIGINT) AS team_id, \
             CAST(opponent_team_id AS BIGINT) AS opponent_team_id, season_year, season_type, \
             game_id, CAST(game_date AS DATE) AS game_date, CAST(period AS INTEGER) AS period, \
             {} FROM player_box_scores",
            stat_columns.join(", ")
        )
    }

    fn decode_row(row: &PgRow) -> Result<GameRecord, GameLogError> {
        let decode = |e: sqlx::Error| GameLogError::Decode(e.to_string());

        let season_type: String = row.try_get("season_type").map_err(decode)?;
        let season_type = SeasonType::from_str(&season_type)
            .map_err(|_| GameLogError::Decode(format!("unknown season type '{}'", season_type)))?;

        let period: i32 = row.try_get("period").map_err(decode)?;
        let period = u8::try_from(period)
            .map_err(|_| GameLogError::Decode(format!("period {} out of range", period)))?;

        let mut stats = std::collections::HashMap::new();
        for stat in StatName::iter() {
            let value: Option<f64> = row.try_get(stat.as_ref()).map_err(decode)?;
            if let Some(value) = value {
                stats.insert(stat, value);
            }
        }

        let player_id: i64 = row.try_get("player_id").map_err(decode)?;
        let team_id: i64 = row.try_get("team_id").map_err(decode)?;
        let opponent_team_id: i64 = row.try_get("opponent_team_id").map_err(decode)?;
        let game_date: NaiveDate = row.try_get("game_date").map_err(decode)?;

        Ok(GameRecord {
            player_id,
            team_id,
            opponent_team_id,
            season_year: row.try_get("season_year").map_err(decode)?,
            season_type,
            game_id: row.try_get("game_id").map_err(decode)?,
            game_date,
            period,
            stats,
        })
    }
}

#[async_trait]
impl GameLogRepository for PostgresGameLogRepository {
    #[instrument(skip(self))]
    async fn load_all(&self) -> Result<Vec<GameRecord>, GameLogError> {
        debug!("Loading game log from database");

        let rows = sqlx::query(&Self::select_statement())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to load game log from database");
                GameLogError::Database(e.to_string())
            })?;

        let records = rows
            .iter()
            .map(Self::decode_row)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = records.len(), "Loaded game log from database");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_record(game_id: &str) -> GameRecord {
        GameRecord {
            player_id: 1,
            team_id: 10,
            opponent_team_id: 20,
            season_year: "2024-25".to_string(),
            season_type: SeasonType::Playoffs,
            game_id: game_id.to_string(),
            game_date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            period: 0,
            stats: HashMap::from([(StatName::Points, 21.0)]),
        }
    }

    #[tokio::test]
    async fn returns_seeded_records() {
        let repo = InMemoryGameLogRepository::with_records(vec![sample_record("g1")]);

        let records = repo.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].game_id, "g1");
    }

    #[tokio::test]
    async fn pushed_records_appear_on_next_load() {
        let repo = InMemoryGameLogRepository::new();
        assert!(repo.load_all().await.unwrap().is_empty());

        repo.push(sample_record("g2"));
        assert_eq!(repo.load_all().await.unwrap().len(), 1);
    }

    #[test]
    fn missing_json_file_is_an_io_error() {
        let result = InMemoryGameLogRepository::from_json_path("/definitely/not/here.json");
        assert!(matches!(result, Err(GameLogError::Io(_))));
    }

    #[test]
    fn select_statement_casts_every_stat_column() {
        let statement = PostgresGameLogRepository::select_statement();
        assert!(statement.contains("CAST(points AS DOUBLE PRECISION) AS points"));
        assert!(statement.contains("CAST(nba_fantasy_points AS DOUBLE PRECISION)"));
        assert!(statement.ends_with("FROM player_box_scores"));
    }
}
