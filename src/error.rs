use thiserror::Error;

/// Malformed query input, detected before any enumeration starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid hole cards: {hands:?}, must be a list of 2-10 hands")]
    HandCount { hands: Vec<Vec<String>> },
    #[error("invalid board: {board:?}, must be a list of 0-4 cards")]
    BoardSize { board: Vec<String> },
    #[error("invalid hole cards: {hands:?}, each hand must have exactly 2 cards")]
    HandSize { hands: Vec<Vec<String>> },
    #[error("invalid hole cards: {hands:?}, contains invalid card {card:?}")]
    InvalidHoleCard {
        hands: Vec<Vec<String>>,
        card: String,
    },
    #[error("invalid board: {board:?}, contains invalid card {card:?}")]
    InvalidBoardCard { board: Vec<String>, card: String },
    #[error("input contains duplicates: {unique} unique cards were found from {total} total")]
    DuplicateCards { unique: usize, total: usize },
}

/// A precomputed lookup table broke its contract
#[derive(Debug, Error)]
pub enum TableError {
    #[error("corrupt ranking table: {0}")]
    CorruptRankingTable(String),
    #[error("corrupt completion table: {0}")]
    CorruptCompletionTable(String),
    #[error("unable to read table: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EquityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("no legal board completions with {cards_to_come} cards to come")]
    NoLegalCompletions { cards_to_come: usize },
    #[error("an evaluation worker panicked")]
    WorkerPanicked,
    #[error("cannot split an outcome of {strengths} strengths between {players} players, need one strength per player and at most 10 players")]
    MalformedOutcome { players: usize, strengths: usize },
}

impl EquityError {
    /// the caller can fix the input and retry
    pub fn is_validation(&self) -> bool {
        matches!(self, EquityError::Validation(_))
    }

    /// a lookup table is broken, retrying won't help
    pub fn is_corrupt_table(&self) -> bool {
        matches!(
            self,
            EquityError::Table(TableError::CorruptRankingTable(_))
                | EquityError::Table(TableError::CorruptCompletionTable(_))
        )
    }
}
