pub mod lines;
pub mod models;

pub use lines::{LineCollector, OddsOutcome, ProjectionLine};
pub use models::{BookmakerQuote, PropRecord, PropRequest, SplitStats, WindowStats};
