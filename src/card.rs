//! Cards and card masks.
//!
//! Cards are coded 1..=52 as `4 * rank + suit + 1` where rank 0 is a deuce
//! and suits are ordered clubs, diamonds, hearts, spades:
//!
//! ```text
//! 2c = 1, 2d = 2, 2h = 3, 2s = 4, 3c = 5, ... Ah = 51, As = 52
//! ```
//!
//! Code 0 is never a card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid card: {0:?}")]
    InvalidToken(String),
    #[error("invalid card code: {0}")]
    InvalidCode(u8),
    #[error("invalid rank {rank} or suit {suit}")]
    InvalidRankOrSuit { rank: u8, suit: u8 },
}

lazy_static! {
    /// Every card ordered by code, `CARDS[i]` has code `i + 1`
    pub static ref CARDS: [Card; 52] = init_cards();
}

fn init_cards() -> [Card; 52] {
    let mut cards = [Card(1); 52];
    for (i, card) in cards.iter_mut().enumerate() {
        *card = Card(i as u8 + 1);
    }
    cards
}

/// A single card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card from a rank (0 = deuce .. 12 = ace) and a suit
    /// (0 = clubs, 1 = diamonds, 2 = hearts, 3 = spades)
    pub fn new(rank: u8, suit: u8) -> Result<Card, CardError> {
        if rank >= RANK_COUNT || suit >= SUIT_COUNT {
            return Err(CardError::InvalidRankOrSuit { rank, suit });
        }
        Ok(Card(4 * rank + suit + 1))
    }

    /// Card for a code in 1..=52
    pub fn from_code(code: u8) -> Result<Card, CardError> {
        if code == 0 || code > CARD_COUNT {
            return Err(CardError::InvalidCode(code));
        }
        Ok(Card(code))
    }

    /// Parse one of the 52 canonical tokens, e.g. `"Ah"`, `"Tc"`, `"2s"`
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_equity::card::Card;
    /// assert_eq!(Card::encode("2c").unwrap(), 1);
    /// assert_eq!(Card::encode("As").unwrap(), 52);
    /// assert!(Card::encode("as").is_err());
    /// ```
    pub fn encode(token: &str) -> Result<u8, CardError> {
        token.parse::<Card>().map(|c| c.code())
    }

    /// Token of a card code, the inverse of `encode`
    pub fn decode(code: u8) -> Result<String, CardError> {
        Card::from_code(code).map(|c| c.to_string())
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// 0 = deuce .. 12 = ace
    pub const fn rank(self) -> u8 {
        (self.0 - 1) >> 2
    }

    /// 0 = clubs, 1 = diamonds, 2 = hearts, 3 = spades
    pub const fn suit(self) -> u8 {
        (self.0 - 1) & 3
    }

    /// bit of this card in a `CardMask`
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

fn char_to_rank(c: char) -> Option<u8> {
    RANK_TO_CHAR.iter().position(|r| *r == c).map(|r| r as u8)
}

fn char_to_suit(c: char) -> Option<u8> {
    SUIT_TO_CHAR.iter().position(|s| *s == c).map(|s| s as u8)
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidToken(token.to_string());
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = char_to_rank(r).ok_or_else(invalid)?;
                let suit = char_to_suit(s).ok_or_else(invalid)?;
                Card::new(rank, suit).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_TO_CHAR[usize::from(self.rank())],
            SUIT_TO_CHAR[usize::from(self.suit())]
        )
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl std::convert::TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

/// Set of cards, bit `code` is set for every card in the set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardMask(u64);

impl CardMask {
    pub const fn empty() -> Self {
        CardMask(0)
    }

    pub fn from_cards<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Self {
        let mut mask = CardMask::empty();
        for c in cards {
            mask.insert(*c);
        }
        mask
    }

    /// add a card, returns false if it was already in the set
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.0 |= card.mask();
        !had
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & card.mask() != 0
    }

    /// true if the raw code is in the set, codes outside 1..=52 never are
    #[inline]
    pub fn contains_code(self, code: u8) -> bool {
        code != 0 && code <= CARD_COUNT && self.0 & (1u64 << code) != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn bits(self) -> u64 {
        self.0
    }
}
