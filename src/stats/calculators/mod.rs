pub mod head_to_head;
pub mod hot_streak;
pub mod rolling;
pub mod season;
pub mod total;

pub use head_to_head::{h2h_hit_rate, HeadToHeadCalculator};
pub use hot_streak::{hot_streak, HotStreakCalculator};
pub use rolling::{last_n_games_hit_rate, RollingWindowCalculator};
pub use season::{season_hit_rate, SeasonCalculator};
pub use total::{total_for_game, total_for_row};
