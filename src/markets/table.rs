use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::errors::MarketError;
use super::models::{MarketComponent, MarketDefinition, MarketKey};
use crate::gamelog::{Period, StatName};

const BUILTIN_MARKETS: &str = include_str!("../../config/markets.json");

#[derive(Debug, Deserialize)]
struct RawMarket {
    #[serde(default)]
    label: Option<String>,
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    period: Period,
    stats: Vec<String>,
}

/// Validated lookup from market key to the stats it sums.
#[derive(Debug, Clone, Default)]
pub struct MarketTable {
    definitions: HashMap<MarketKey, MarketDefinition>,
}

impl MarketTable {
    pub fn builtin() -> Result<Self, MarketError> {
        Self::from_json(BUILTIN_MARKETS)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MarketError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, MarketError> {
        let raw: BTreeMap<String, RawMarket> = serde_json::from_str(text)?;
        let mut definitions = HashMap::with_capacity(raw.len());

        for (raw_key, market) in raw {
            let key = MarketKey::from_str(&raw_key)
                .map_err(|_| MarketError::UnknownMarket(raw_key.clone()))?;

            if market.components.is_empty() {
                return Err(MarketError::Invalid(format!(
                    "{} has no components",
                    raw_key
                )));
            }

            let mut components = Vec::with_capacity(market.components.len());
            for component in market.components {
                if component.stats.is_empty() {
                    return Err(MarketError::Invalid(format!(
                        "{} period {} lists no stats",
                        raw_key, component.period
                    )));
                }

                let stats = component
                    .stats
                    .iter()
                    .map(|stat| {
                        StatName::from_str(stat).map_err(|_| MarketError::UnknownStat {
                            market: raw_key.clone(),
                            stat: stat.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                components.push(MarketComponent {
                    period: component.period,
                    stats,
                });
            }

            definitions.insert(
                key,
                MarketDefinition {
                    key,
                    label: market.label.unwrap_or_else(|| raw_key.clone()),
                    components,
                },
            );
        }

        debug!(markets = definitions.len(), "Market table loaded");
        Ok(Self { definitions })
    }

    pub fn definition(&self, key: MarketKey) -> Result<&MarketDefinition, MarketError> {
        self.definitions
            .get(&key)
            .ok_or_else(|| MarketError::UnknownMarket(key.to_string()))
    }

    /// Looks up a market by the provider's raw key string
    pub fn resolve(&self, raw_key: &str) -> Result<&MarketDefinition, MarketError> {
        let key = MarketKey::from_str(raw_key)
            .map_err(|_| MarketError::UnknownMarket(raw_key.to_string()))?;
        self.definition(key)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
