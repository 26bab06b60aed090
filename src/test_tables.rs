//! Tables shared by the unit tests, loaded once per test binary

use std::sync::Arc;

use crate::board_enumerator::BoardTables;
use crate::config::EngineConfig;
use crate::constants::*;
use crate::equity_calculator::EquityCalculator;
use crate::hand_evaluator::RankTable;

lazy_static! {
    pub static ref RANK_TABLE: Arc<RankTable> =
        Arc::new(RankTable::load(EngineConfig::default().rank_table).unwrap());
    pub static ref BOARD_TABLES: Arc<BoardTables> =
        Arc::new(BoardTables::load(EngineConfig::default().board_table).unwrap());
}

pub fn calculator() -> EquityCalculator {
    EquityCalculator::new(RANK_TABLE.clone(), BOARD_TABLES.clone())
}

/// Rank table whose every entry is its own index, so walking a chain
/// adds up the card codes
pub fn identity_rank_table() -> RankTable {
    let len = RANK_TABLE_SEED + u32::from(CARD_COUNT) * HAND_CARDS as u32 + 1;
    RankTable::from_vec((0..len).collect()).unwrap()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
