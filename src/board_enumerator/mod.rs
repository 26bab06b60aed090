//! Candidate board completions
//!
//! For every number of cards still to come, a [`CompletionTable`] lists
//! each combination of that many cards once. A query filters out the
//! combinations that touch a dealt card, leaving exactly the boards that
//! can still run out.

mod board_tables;
mod completion_table;

pub use board_tables::BoardTables;
pub use completion_table::{CompletionTable, Completions};

/// n choose k
///
/// # Example
///
/// ```
/// use holdem_equity::board_enumerator::binomial;
/// assert_eq!(binomial(52, 5), 2_598_960);
/// assert_eq!(binomial(32, 5), 201_376);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut out = 1u64;
    for i in 0..k {
        out = out * (n - i) / (i + 1);
    }
    out
}
