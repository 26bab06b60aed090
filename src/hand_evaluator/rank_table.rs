use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use log::info;
use read_write::VecReader;

use super::HandStrength;
use crate::constants::*;
use crate::error::TableError;

/// Chained lookup table for 7 card hand evaluation
///
/// Starting at offset 53, each card code is added to the current value
/// and the sum is looked up to get the next value. After 7 cards the value
/// is the hand strength. The table is read-only once loaded and can be
/// shared between any number of queries.
pub struct RankTable {
    ranks: Vec<u32>,
}

impl RankTable {
    /// smallest table that holds the row of the empty hand
    const MIN_LEN: usize = RANK_TABLE_SEED as usize + CARD_COUNT as usize + 1;

    pub fn from_vec(ranks: Vec<u32>) -> Result<Self, TableError> {
        if ranks.len() < Self::MIN_LEN {
            return Err(TableError::CorruptRankingTable(format!(
                "table has {} entries, at least {} are needed",
                ranks.len(),
                Self::MIN_LEN
            )));
        }
        Ok(RankTable { ranks })
    }

    /// Reads a table of little-endian u32 values
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let mut file = BufReader::new(File::open(path)?);
        let ranks = file.read_vec::<u32>().map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => TableError::CorruptRankingTable(e.to_string()),
            _ => TableError::Io(e),
        })?;
        let table = RankTable::from_vec(ranks)?;
        info!(
            "loaded rank table {} with {} entries",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    #[inline]
    fn lookup(&self, p: u32, code: u8) -> Result<u32, TableError> {
        let idx = p as usize + usize::from(code);
        match self.ranks.get(idx) {
            Some(v) => Ok(*v),
            None => Err(TableError::CorruptRankingTable(format!(
                "lookup at {} is outside the table ({} entries)",
                idx,
                self.ranks.len()
            ))),
        }
    }

    /// Follows the chain from `p` through `cards`
    #[inline]
    pub fn walk(&self, p: u32, cards: &[u8]) -> Result<u32, TableError> {
        let mut p = p;
        for c in cards {
            p = self.lookup(p, *c)?;
        }
        Ok(p)
    }

    /// Chain value after `cards`, starting from the empty hand
    ///
    /// Lets a caller evaluate the cards shared by many hands once.
    pub fn prefix(&self, cards: &[u8]) -> Result<u32, TableError> {
        self.walk(RANK_TABLE_SEED, cards)
    }

    /// Completes a 7 card hand from a prefix holding `7 - cards.len()` cards
    #[inline]
    pub fn finish(&self, prefix: u32, cards: &[u8]) -> Result<HandStrength, TableError> {
        let value = self.walk(prefix, cards)?;
        if value == 0 {
            return Err(TableError::CorruptRankingTable(
                "hand evaluated to strength 0".to_string(),
            ));
        }
        Ok(HandStrength::new(value))
    }

    /// Strength of the best five cards out of 7 distinct card codes
    ///
    /// The order of the cards doesn't matter.
    pub fn strength(&self, cards: &[u8; HAND_CARDS]) -> Result<HandStrength, TableError> {
        self.finish(RANK_TABLE_SEED, cards)
    }

    /// Strength of a 5 card hand
    pub fn strength_of_five(&self, cards: &[u8; 5]) -> Result<HandStrength, TableError> {
        self.own_slot(cards)
    }

    /// Strength of the best five cards out of 6
    pub fn strength_of_six(&self, cards: &[u8; 6]) -> Result<HandStrength, TableError> {
        self.own_slot(cards)
    }

    /// 5 and 6 card hands keep their strength in slot 0 of their row
    fn own_slot(&self, cards: &[u8]) -> Result<HandStrength, TableError> {
        let p = self.prefix(cards)?;
        self.finish(p, &[0])
    }
}

impl fmt::Debug for RankTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankTable")
            .field("len", &self.ranks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::hand_evaluator::HandCategory;
    use crate::test_tables::{identity_rank_table, RANK_TABLE};
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn codes(tokens: &[&str]) -> [u8; 7] {
        let mut cards = [0u8; 7];
        for (c, t) in cards.iter_mut().zip(tokens) {
            *c = Card::encode(t).unwrap();
        }
        cards
    }

    fn strength(tokens: &[&str]) -> HandStrength {
        RANK_TABLE.strength(&codes(tokens)).unwrap()
    }

    #[test]
    fn test_synthetic_chain() {
        // identity table: the chain just sums the codes
        let table = identity_rank_table();
        let s = table.strength(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(s.value(), 53 + 28);
        let p = table.prefix(&[1, 2]).unwrap();
        assert_eq!(table.finish(p, &[3, 4, 5, 6, 7]).unwrap(), s);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let table = RankTable::from_vec(vec![1000; RankTable::MIN_LEN]).unwrap();
        match table.strength(&[1, 2, 3, 4, 5, 6, 7]) {
            Err(TableError::CorruptRankingTable(_)) => {}
            r => panic!("expected corrupt table, got {:?}", r),
        }
    }

    #[test]
    fn test_zero_strength_is_corrupt() {
        let table = RankTable::from_vec(vec![0; 500]).unwrap();
        assert!(matches!(
            table.strength(&[1, 2, 3, 4, 5, 6, 7]),
            Err(TableError::CorruptRankingTable(_))
        ));
    }

    #[test]
    fn test_short_table() {
        assert!(matches!(
            RankTable::from_vec(vec![0; 10]),
            Err(TableError::CorruptRankingTable(_))
        ));
    }

    #[test]
    fn test_permutation_invariance() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut deck: Vec<u8> = (1..=CARD_COUNT).collect();
        for _ in 0..200 {
            deck.shuffle(&mut rng);
            let mut hand = [0u8; 7];
            hand.copy_from_slice(&deck[..7]);
            let expected = RANK_TABLE.strength(&hand).unwrap();
            for _ in 0..5 {
                hand.shuffle(&mut rng);
                assert_eq!(RANK_TABLE.strength(&hand).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_categories() {
        let cases: &[(&[&str], HandCategory)] = &[
            (&["As", "Kd", "9h", "7c", "4s", "3d", "2h"], HandCategory::HighCard),
            (&["As", "Ad", "9h", "7c", "4s", "3d", "2h"], HandCategory::Pair),
            (&["As", "Ad", "9h", "9c", "4s", "3d", "2h"], HandCategory::TwoPair),
            (&["As", "Ad", "Ah", "9c", "4s", "3d", "2h"], HandCategory::ThreeOfAKind),
            (&["As", "Kd", "5h", "7c", "4s", "3d", "2h"], HandCategory::Straight),
            (&["As", "Ks", "9s", "7c", "4s", "3s", "2h"], HandCategory::Flush),
            (&["As", "Ad", "Ah", "9c", "9s", "3d", "2h"], HandCategory::FullHouse),
            (&["As", "Ad", "Ah", "Ac", "9s", "3d", "2h"], HandCategory::FourOfAKind),
            (&["As", "Ks", "Qs", "Js", "Ts", "3d", "2h"], HandCategory::StraightFlush),
        ];
        for (tokens, category) in cases {
            assert_eq!(strength(tokens).category(), Some(*category), "{:?}", tokens);
        }
    }

    #[test]
    fn test_one_card_improvements() {
        // each hand differs from the previous one by a single card
        let ladder: &[&[&str]] = &[
            &["As", "Kd", "9h", "7c", "4s", "3d", "2h"],
            &["As", "Kd", "9h", "7c", "4s", "3d", "Ah"],
            &["As", "Kd", "9h", "7c", "Ks", "3d", "Ah"],
            &["As", "Ad", "9h", "7c", "Ks", "3d", "Ah"],
            &["As", "Ad", "9h", "Ac", "Ks", "3d", "Ah"],
        ];
        for pair in ladder.windows(2) {
            assert!(strength(pair[1]) > strength(pair[0]), "{:?}", pair[1]);
        }
        let pair = strength(&["As", "Kd", "9h", "7c", "4s", "3d", "Ah"]);
        let trips = strength(&["As", "Ad", "9h", "7c", "4s", "3d", "Ah"]);
        assert!(trips > pair);
        // wheel loses to a six high straight
        let wheel = strength(&["As", "2d", "3h", "4c", "5s", "9d", "Jh"]);
        let six_high = strength(&["6s", "2d", "3h", "4c", "5s", "9d", "Jh"]);
        assert!(six_high > wheel);
        // a better kicker wins
        let k9 = strength(&["As", "Ad", "Kh", "9c", "7s", "4d", "2h"]);
        let kt = strength(&["As", "Ad", "Kh", "Tc", "7s", "4d", "2h"]);
        assert!(kt > k9);
    }

    #[test]
    fn test_ties_ignore_suits() {
        let a = strength(&["As", "Kd", "9h", "7c", "4s", "3d", "2h"]);
        let b = strength(&["Ad", "Kc", "9s", "7h", "4d", "3c", "2s"]);
        assert_eq!(a, b);
        // the two lowest cards don't play
        let c = strength(&["As", "Kd", "9h", "7c", "4s", "3d", "2h"]);
        let d = strength(&["As", "Kd", "9h", "7c", "4s", "2d", "3h"]);
        assert_eq!(c, d);
    }

    #[test]
    fn test_partial_hands() {
        let seven = codes(&["As", "Ks", "Qs", "Js", "Ts", "3d", "2h"]);
        let mut five = [0u8; 5];
        five.copy_from_slice(&seven[..5]);
        let s = RANK_TABLE.strength_of_five(&five).unwrap();
        assert_eq!(s.category(), Some(HandCategory::StraightFlush));
        assert_eq!(RANK_TABLE.strength(&seven).unwrap(), s);

        // the sixth card doesn't play
        let mut six = [0u8; 6];
        six.copy_from_slice(&seven[..6]);
        assert_eq!(RANK_TABLE.strength_of_six(&six).unwrap(), s);

        // a pair of eights with ace king queen
        let pair = codes(&["8s", "8d", "Ah", "Kc", "Qd", "2s", "3c"]);
        six.copy_from_slice(&pair[..6]);
        let strength = RANK_TABLE.strength_of_six(&six).unwrap();
        assert_eq!(strength.category(), Some(HandCategory::Pair));
        assert_eq!(RANK_TABLE.strength(&pair).unwrap(), strength);
    }

    #[test]
    fn test_prefix_matches_full_walk() {
        let hand = codes(&["Qh", "Jh", "Th", "2c", "7d", "9h", "3s"]);
        let prefix = RANK_TABLE.prefix(&hand[..4]).unwrap();
        assert_eq!(
            RANK_TABLE.finish(prefix, &hand[4..]).unwrap(),
            RANK_TABLE.strength(&hand).unwrap()
        );
    }
}
