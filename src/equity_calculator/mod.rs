//! Exhaustive equity enumeration
//!
//! A [`Query`] holds validated hole cards and the known board. The
//! [`EquityCalculator`] evaluates every player on every legal board
//! completion, fills a [`StrengthMatrix`] and reduces it to a [`Tally`],
//! which becomes the caller-facing [`EquitySummary`].

mod calculator;
mod query;
mod strength_matrix;
mod summary;

pub use calculator::EquityCalculator;
pub use query::Query;
pub use strength_matrix::{StrengthMatrix, Tally};
pub use summary::{EquitySummary, PlayerEquity};
