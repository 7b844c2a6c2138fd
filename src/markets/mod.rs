mod errors;
pub mod models;
pub mod table;

pub use errors::MarketError;
pub use models::{MarketComponent, MarketDefinition, MarketKey};
pub use table::MarketTable;
