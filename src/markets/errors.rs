use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Unknown market: {0}")]
    UnknownMarket(String),

    #[error("Market {market} references unknown stat '{stat}'")]
    UnknownStat { market: String, stat: String },

    #[error("Invalid market definition: {0}")]
    Invalid(String),

    #[error("Market configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
