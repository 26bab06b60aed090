mod rank_table;
mod strength;

pub use rank_table::RankTable;
pub use strength::{HandCategory, HandStrength};
