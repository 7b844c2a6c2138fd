use std::path::PathBuf;
use std::str::FromStr;

use crate::shared::AppError;
use crate::stats::{UnderHitPolicy, DEFAULT_SEASON, DEFAULT_WINDOWS};

pub const DEFAULT_PROPS_PATH: &str = "props.json";

/// Where the game log is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLogSource {
    Postgres(String),
    JsonFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// DATABASE_URL, else GAME_LOG_PATH
    pub game_log_source: GameLogSource,
    /// MARKETS_PATH; the bundled table when unset
    pub markets_path: Option<PathBuf>,
    pub props_path: PathBuf,
    pub current_season: String,
    /// HIT_RATE_WINDOWS, comma-separated
    pub windows: Vec<u32>,
    pub under_policy: UnderHitPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let game_log_source = match (var("DATABASE_URL"), var("GAME_LOG_PATH")) {
            (Some(url), _) => GameLogSource::Postgres(url),
            (None, Some(path)) => GameLogSource::JsonFile(PathBuf::from(path)),
            (None, None) => {
                return Err(AppError::Config(
                    "either DATABASE_URL or GAME_LOG_PATH must be set".to_string(),
                ))
            }
        };

        let windows = match var("HIT_RATE_WINDOWS") {
            Some(raw) => parse_windows(&raw)?,
            None => DEFAULT_WINDOWS.to_vec(),
        };

        let under_policy = match var("UNDER_HIT_POLICY") {
            Some(raw) => UnderHitPolicy::from_str(raw.trim()).map_err(|_| {
                AppError::Config(format!(
                    "UNDER_HIT_POLICY must be mirror_over or complement, got {raw}"
                ))
            })?,
            None => UnderHitPolicy::default(),
        };

        Ok(Self {
            game_log_source,
            markets_path: var("MARKETS_PATH").map(PathBuf::from),
            props_path: PathBuf::from(
                var("PROPS_PATH").unwrap_or_else(|| DEFAULT_PROPS_PATH.to_string()),
            ),
            current_season: var("CURRENT_SEASON").unwrap_or_else(|| DEFAULT_SEASON.to_string()),
            windows,
            under_policy,
        })
    }
}

fn parse_windows(raw: &str) -> Result<Vec<u32>, AppError> {
    let windows = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u32>() {
            Ok(window) if window > 0 => Ok(window),
            _ => Err(AppError::Config(format!(
                "HIT_RATE_WINDOWS entries must be positive integers, got {part}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if windows.is_empty() {
        return Err(AppError::Config(
            "HIT_RATE_WINDOWS must list at least one window".to_string(),
        ));
    }
    Ok(windows)
}
