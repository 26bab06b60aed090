//! # Holdem Equity
//! Exact texas holdem equities by full enumeration
//!
//! Every legal completion of the board is dealt out and every player's
//! best hand is ranked on it, so the result has no sampling error.
//!
//! Supports
//!  - 2 to 10 players with known hole cards
//!  - boards with 0 to 4 known cards
//!  - exact split pot accounting
//!  - 7 card hand evaluation through a chained lookup table
//!
//! ## Equity Calculator
//!
//! ```
//! use holdem_equity::config::EngineConfig;
//! use holdem_equity::equity_calculator::EquityCalculator;
//!
//! let calc = EquityCalculator::from_config(&EngineConfig::default()).unwrap();
//! let summary = calc
//!     .calculate(&[vec!["Kd", "Qd"], vec!["7c", "7h"]], &["Ah", "Td", "2c"])
//!     .unwrap();
//! for player in summary.ranked() {
//!     println!("{} {:.4}", player.hole_cards, player.ev);
//! }
//! ```
//!
//! ## Hand Evaluator
//!
//! ```
//! use holdem_equity::config::EngineConfig;
//! use holdem_equity::hand_evaluator::{HandCategory, RankTable};
//! use holdem_equity::card::Card;
//!
//! let table = RankTable::load(EngineConfig::default().rank_table).unwrap();
//! let mut hand = [0u8; 7];
//! for (c, token) in hand.iter_mut().zip(&["As", "Ks", "Qs", "Js", "Ts", "2d", "3c"]) {
//!     *c = Card::encode(token).unwrap();
//! }
//! let strength = table.strength(&hand).unwrap();
//! assert_eq!(strength.category(), Some(HandCategory::StraightFlush));
//! ```

#[macro_use]
extern crate lazy_static;

pub use read_write;

pub mod board_enumerator;
pub mod card;
pub mod config;
pub mod constants;
pub mod equity_calculator;
pub mod error;
pub mod hand_evaluator;

pub use error::{EquityError, TableError, ValidationError};

#[cfg(test)]
mod test_tables;
