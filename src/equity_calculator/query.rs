use crate::card::{Card, CardMask};
use crate::constants::*;
use crate::error::ValidationError;

/// Validated input of one equity calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    hands: Vec<[Card; HOLE_CARDS]>,
    board: Vec<Card>,
    used: CardMask,
}

fn owned_hands<S: AsRef<str>>(hands: &[Vec<S>]) -> Vec<Vec<String>> {
    hands
        .iter()
        .map(|h| h.iter().map(|c| c.as_ref().to_string()).collect())
        .collect()
}

fn owned_board<S: AsRef<str>>(board: &[S]) -> Vec<String> {
    board.iter().map(|c| c.as_ref().to_string()).collect()
}

impl Query {
    /// Validates card tokens, one list of two tokens per player
    ///
    /// Checks run in order: number of hands, board size, hand sizes,
    /// hole card tokens, board tokens, then duplicates. The first failing
    /// check is returned along with the input it rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_equity::equity_calculator::Query;
    /// let query = Query::parse(&[vec!["Ac", "Ad"], vec!["Kh", "Ks"]], &["2c", "7d", "9s"]).unwrap();
    /// assert_eq!(query.cards_to_come(), 2);
    /// assert!(Query::parse(&[vec!["Ac", "Ad"], vec!["Ad", "Ks"]], &[]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(hands: &[Vec<S>], board: &[S]) -> Result<Self, ValidationError> {
        if hands.len() < MIN_PLAYERS || hands.len() > MAX_PLAYERS {
            return Err(ValidationError::HandCount {
                hands: owned_hands(hands),
            });
        }
        if board.len() > MAX_KNOWN_BOARD_CARDS {
            return Err(ValidationError::BoardSize {
                board: owned_board(board),
            });
        }
        if hands.iter().any(|h| h.len() != HOLE_CARDS) {
            return Err(ValidationError::HandSize {
                hands: owned_hands(hands),
            });
        }

        let parse_hole = |token: &S| {
            token
                .as_ref()
                .parse::<Card>()
                .map_err(|_| ValidationError::InvalidHoleCard {
                    hands: owned_hands(hands),
                    card: token.as_ref().to_string(),
                })
        };
        let mut hole_cards = Vec::with_capacity(hands.len());
        for hand in hands {
            hole_cards.push([parse_hole(&hand[0])?, parse_hole(&hand[1])?]);
        }

        let mut board_cards = Vec::with_capacity(board.len());
        for token in board {
            let card = token
                .as_ref()
                .parse::<Card>()
                .map_err(|_| ValidationError::InvalidBoardCard {
                    board: owned_board(board),
                    card: token.as_ref().to_string(),
                })?;
            board_cards.push(card);
        }

        Query::new(hole_cards, board_cards)
    }

    /// Validates already decoded cards
    pub fn new(hands: Vec<[Card; HOLE_CARDS]>, board: Vec<Card>) -> Result<Self, ValidationError> {
        if hands.len() < MIN_PLAYERS || hands.len() > MAX_PLAYERS {
            return Err(ValidationError::HandCount {
                hands: hands
                    .iter()
                    .map(|h| h.iter().map(Card::to_string).collect())
                    .collect(),
            });
        }
        if board.len() > MAX_KNOWN_BOARD_CARDS {
            return Err(ValidationError::BoardSize {
                board: board.iter().map(Card::to_string).collect(),
            });
        }

        let total = hands.len() * HOLE_CARDS + board.len();
        let used = CardMask::from_cards(hands.iter().flatten().chain(board.iter()));
        if used.count() as usize != total {
            return Err(ValidationError::DuplicateCards {
                unique: used.count() as usize,
                total,
            });
        }
        Ok(Query { hands, board, used })
    }

    pub fn hands(&self) -> &[[Card; HOLE_CARDS]] {
        &self.hands
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn n_players(&self) -> usize {
        self.hands.len()
    }

    /// every card dealt to a player or the board
    pub fn used(&self) -> CardMask {
        self.used
    }

    /// Community cards still to be dealt
    pub fn cards_to_come(&self) -> usize {
        BOARD_CARDS - self.board.len()
    }

    /// Codes of a player's hole cards followed by the known board
    pub fn known_codes(&self, player: usize) -> Vec<u8> {
        self.hands[player]
            .iter()
            .chain(self.board.iter())
            .map(|c| c.code())
            .collect()
    }
}
