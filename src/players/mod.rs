pub mod directory;
pub mod teams;

pub use directory::{InMemoryPlayerDirectory, PlayerDirectory, PlayerProfile};
pub use teams::{team_id_by_abbreviation, team_id_by_name, Team, TEAMS};
