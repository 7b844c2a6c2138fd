use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameLogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
