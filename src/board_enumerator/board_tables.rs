use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, ErrorKind};
use std::path::Path;

use log::info;
use read_write::VecReader;

use super::{binomial, CompletionTable, Completions};
use crate::card::CardMask;
use crate::constants::*;
use crate::error::{EquityError, TableError};

/// Completion tables indexed by the number of cards to come
#[derive(Clone)]
pub struct BoardTables {
    tables: Vec<CompletionTable>,
}

fn corrupt(e: io::Error, what: &str) -> TableError {
    match e.kind() {
        ErrorKind::UnexpectedEof => TableError::CorruptCompletionTable(format!("{} is truncated", what)),
        _ => TableError::Io(e),
    }
}

impl BoardTables {
    /// Tables for any subset of 1..=5 cards to come, at most one each
    pub fn from_tables(tables: Vec<CompletionTable>) -> Result<Self, TableError> {
        let mut seen = [false; BOARD_CARDS + 1];
        for t in &tables {
            if seen[t.rows()] {
                return Err(TableError::CorruptCompletionTable(format!(
                    "two tables for {} cards to come",
                    t.rows()
                )));
            }
            seen[t.rows()] = true;
        }
        Ok(BoardTables { tables })
    }

    /// Reads the five sections written by the table generator
    ///
    /// Each section is a `u32` card count `k`, a `u32` column count and
    /// then `k` rows of `u8` codes. Every section must list all
    /// `C(52, k)` combinations once, in lexicographic order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let mut file = BufReader::new(File::open(path)?);
        let mut tables = Vec::with_capacity(BOARD_CARDS);
        for k in 1..=BOARD_CARDS {
            let header = file
                .read_vec_exact::<u32>(2)
                .map_err(|e| corrupt(e, &format!("header of section {}", k)))?;
            let (rows, columns) = (header[0] as usize, header[1] as usize);
            if rows != k {
                return Err(TableError::CorruptCompletionTable(format!(
                    "section {} claims {} cards to come",
                    k, rows
                )));
            }
            let expected = binomial(u64::from(CARD_COUNT), k as u64) as usize;
            if columns != expected {
                return Err(TableError::CorruptCompletionTable(format!(
                    "section {} has {} columns, expected {}",
                    k, columns, expected
                )));
            }
            let codes = file
                .read_vec_exact::<u8>(rows * columns)
                .map_err(|e| corrupt(e, &format!("section {}", k)))?;
            let table = CompletionTable::new(rows, codes)?;
            table.check_lexicographic()?;
            tables.push(table);
        }
        let rest = file.read_vec::<u8>().map_err(TableError::Io)?;
        if !rest.is_empty() {
            return Err(TableError::CorruptCompletionTable(format!(
                "{} trailing bytes",
                rest.len()
            )));
        }
        info!("loaded board tables {}", path.display());
        BoardTables::from_tables(tables)
    }

    pub fn table(&self, cards_to_come: usize) -> Result<&CompletionTable, TableError> {
        self.tables
            .iter()
            .find(|t| t.rows() == cards_to_come)
            .ok_or_else(|| {
                TableError::CorruptCompletionTable(format!(
                    "no table for {} cards to come",
                    cards_to_come
                ))
            })
    }

    /// The boards of `cards_to_come` cards that avoid every card in `used`
    pub fn completions(
        &self,
        cards_to_come: usize,
        used: CardMask,
    ) -> Result<Completions, EquityError> {
        let completions = self.table(cards_to_come)?.filter(used);
        if completions.is_empty() {
            return Err(EquityError::NoLegalCompletions { cards_to_come });
        }
        Ok(completions)
    }
}

impl fmt::Debug for BoardTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.tables.iter().map(|t| (t.rows(), t.columns())))
            .finish()
    }
}
