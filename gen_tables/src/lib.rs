//! Generates the lookup tables used by holdem_equity.
//!
//! Two files are written:
//!
//! * `hand_ranks.dat` the chained 7 card lookup table, little-endian `u32`s
//! * `boards.dat` every combination of 1 to 5 community cards, for each
//!   size a `u32` row count, a `u32` column count and the row-major codes
//!
//! Cards are coded 1..=52 as `4 * rank + suit + 1`, deuce = 0, clubs = 0,
//! diamonds = 1, hearts = 2, spades = 3. Generation runs from the build
//! script, which cargo reruns whenever the generator changes.

extern crate read_write;

mod board_table;
mod hand_value;
mod rank_table;

pub use board_table::{board_combinations, MAX_CARDS_TO_COME};
pub use hand_value::{hand_key, HandValues, DISTINCT_HANDS, HAND_CATEGORY_SHIFT};
pub use rank_table::{generate_rank_table, RankTableGenerator, RANK_TABLE_SIZE, ROW_SIZE};

use read_write::VecWriter;

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Result, Write};
use std::path::Path;

pub const RANK_TABLE_FILENAME: &str = "hand_ranks.dat";
pub const BOARD_TABLE_FILENAME: &str = "boards.dat";

/// Writes the chained lookup table to `path`
pub fn write_rank_table(path: &Path) -> Result<()> {
    let table = generate_rank_table();
    let mut file = BufWriter::new(File::create(path)?);
    file.write_vec::<u32>(&table)?;
    file.flush()
}

/// Writes the board combination tables for 1 to 5 cards to `path`
pub fn write_board_tables(path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for k in 1..=MAX_CARDS_TO_COME {
        let codes = board_combinations(k);
        file.write_vec::<u32>(&[k as u32, (codes.len() / k) as u32])?;
        file.write_vec::<u8>(&codes)?;
    }
    file.flush()
}

/// Writes a table to a temporary file first, then moves it over `path`
///
/// An interrupted build never leaves a truncated table behind, and a
/// table from an older generator is always replaced.
fn write_atomic(path: &Path, write: fn(&Path) -> Result<()>) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    write(&tmp_path)?;
    fs::rename(&tmp_path, path)
}

/// Writes both tables into `dir`
pub fn gen_tables_in(dir: &Path) -> Result<()> {
    write_atomic(&dir.join(RANK_TABLE_FILENAME), write_rank_table)?;
    write_atomic(&dir.join(BOARD_TABLE_FILENAME), write_board_tables)
}

/// Build script entry point, writes the tables into OUT_DIR
pub fn gen_tables() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR env var for lookup tables not set");
    gen_tables_in(Path::new(&out_dir)).expect("unable to write lookup tables");
}
