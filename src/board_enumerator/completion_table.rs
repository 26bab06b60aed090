use std::cmp::Ordering;

use crate::card::CardMask;
use crate::constants::*;
use crate::error::TableError;

/// Every combination of `rows` distinct cards, one per column
///
/// Codes are stored row-major: row `r` of column `m` is at `r * columns + m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTable {
    rows: usize,
    columns: usize,
    codes: Vec<u8>,
}

impl CompletionTable {
    pub fn new(rows: usize, codes: Vec<u8>) -> Result<Self, TableError> {
        if rows == 0 || rows > BOARD_CARDS {
            return Err(TableError::CorruptCompletionTable(format!(
                "{} cards to come is out of range",
                rows
            )));
        }
        if codes.len() % rows != 0 {
            return Err(TableError::CorruptCompletionTable(format!(
                "{} codes don't fill {} rows",
                codes.len(),
                rows
            )));
        }
        let table = CompletionTable {
            rows,
            columns: codes.len() / rows,
            codes,
        };
        table.check_columns()?;
        Ok(table)
    }

    fn check_columns(&self) -> Result<(), TableError> {
        for m in 0..self.columns {
            let mut seen = 0u64;
            for r in 0..self.rows {
                let code = self.get(r, m);
                if code == 0 || code > CARD_COUNT {
                    return Err(TableError::CorruptCompletionTable(format!(
                        "column {} holds invalid card code {}",
                        m, code
                    )));
                }
                if seen & (1u64 << code) != 0 {
                    return Err(TableError::CorruptCompletionTable(format!(
                        "column {} repeats card code {}",
                        m, code
                    )));
                }
                seen |= 1u64 << code;
            }
        }
        Ok(())
    }

    /// Every column ascending and the columns in strictly increasing
    /// lexicographic order, so no combination is listed twice
    pub fn check_lexicographic(&self) -> Result<(), TableError> {
        for m in 0..self.columns {
            if (1..self.rows).any(|r| self.get(r - 1, m) >= self.get(r, m)) {
                return Err(TableError::CorruptCompletionTable(format!(
                    "column {} is not in ascending order",
                    m
                )));
            }
            if m == 0 {
                continue;
            }
            let prev = (0..self.rows).map(|r| self.get(r, m - 1));
            let column = (0..self.rows).map(|r| self.get(r, m));
            if prev.cmp(column) != Ordering::Less {
                return Err(TableError::CorruptCompletionTable(format!(
                    "column {} repeats or precedes column {}",
                    m,
                    m - 1
                )));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.codes[row * self.columns + column]
    }

    /// Keeps the columns holding no card of `used`, in table order
    pub fn filter(&self, used: CardMask) -> Completions {
        let keep: Vec<usize> = (0..self.columns)
            .filter(|m| (0..self.rows).all(|r| !used.contains_code(self.get(r, *m))))
            .collect();
        let mut codes = Vec::with_capacity(self.rows * keep.len());
        for r in 0..self.rows {
            codes.extend(keep.iter().map(|m| self.get(r, *m)));
        }
        Completions {
            rows: self.rows,
            columns: keep.len(),
            codes,
        }
    }
}

/// The board completions left for one query
///
/// Same row-major layout as the table it was filtered from. `board`
/// copies a single column out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completions {
    rows: usize,
    columns: usize,
    codes: Vec<u8>,
}

impl Completions {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.codes[row * self.columns + column]
    }

    /// Copies the cards of `column` into `out[..rows]`
    #[inline]
    pub fn board(&self, column: usize, out: &mut [u8]) {
        for (r, c) in out.iter_mut().take(self.rows).enumerate() {
            *c = self.get(r, column);
        }
    }
}
