//! Chained lookup table for 7 card hand evaluation.
//!
//! Every reachable set of up to 6 cards is a state with its own row of 53
//! entries. Entry `row + card` of a state holds the row offset of the state
//! with `card` added, and for 6 card states it holds the final strength of
//! the 7 card hand. Evaluating a hand is then 7 dependent lookups starting
//! from the empty state row at offset 53.
//!
//! Suits that can no longer make a flush are dropped from a state, which
//! is what keeps the number of states (612977) small.

use crate::hand_value::{hand_key, HandValues};

/// size of one state row, slot 0 plus one slot per card code
pub const ROW_SIZE: usize = 53;

/// size of the generated table for a standard deck
pub const RANK_TABLE_SIZE: usize = 32_487_834;

const MAX_STATE_CARDS: usize = 6;
const MAX_CARDS: usize = 7;
const CARD_COUNT: u8 = 52;

/// Sorted cards packed one per byte, highest byte first in the low bits.
///
/// A card byte is `(rank + 1) << 4 | suit` with suit 1..=4, or 0 once
/// the suit can't make a flush anymore.
type StateId = u64;

fn state_cards(id: StateId) -> impl Iterator<Item = u8> {
    (0..MAX_CARDS)
        .map(move |i| ((id >> (8 * i)) & 0xff) as u8)
        .take_while(|b| *b != 0)
}

/// Adds a card code (1..=52) to a state
///
/// Returns None if the card is already in the state or the hand would
/// hold five cards of one rank.
fn add_card(id: StateId, card: u8) -> Option<StateId> {
    let mut cards = [0u8; MAX_CARDS];
    let mut n_cards = 0;
    for c in state_cards(id) {
        cards[n_cards] = c;
        n_cards += 1;
    }

    let code = card - 1;
    let new_card = (((code >> 2) + 1) << 4) | ((code & 3) + 1);
    if cards[..n_cards].contains(&new_card) {
        return None;
    }
    cards[n_cards] = new_card;
    n_cards += 1;

    let mut suit_counts = [0u8; 5];
    let mut rank_counts = [0u8; 14];
    for c in &cards[..n_cards] {
        suit_counts[usize::from(c & 0xf)] += 1;
        rank_counts[usize::from(c >> 4)] += 1;
    }
    if rank_counts.iter().any(|count| *count > 4) {
        return None;
    }

    // with n cards dealt a suit needs n - 2 of them to still reach five
    if n_cards >= 4 {
        let needed = n_cards as u8 - 2;
        for c in &mut cards[..n_cards] {
            if suit_counts[usize::from(*c & 0xf)] < needed {
                *c &= 0xf0;
            }
        }
    }

    cards[..n_cards].sort_unstable_by(|a, b| b.cmp(a));
    let id = cards[..n_cards]
        .iter()
        .enumerate()
        .fold(0u64, |id, (i, c)| id | (u64::from(*c) << (8 * i)));
    Some(id)
}

/// Builds the lookup table state by state
pub struct RankTableGenerator {
    values: HandValues,
    /// every state sorted by id, states with more cards have larger ids
    states: Vec<StateId>,
}

impl RankTableGenerator {
    pub fn new() -> Self {
        RankTableGenerator {
            values: HandValues::new(),
            states: Vec::new(),
        }
    }

    /// breadth first walk from the empty hand, one level per card
    fn enumerate_states(&mut self) {
        let mut level: Vec<StateId> = vec![0];
        self.states = level.clone();
        for _ in 0..MAX_STATE_CARDS {
            let mut next: Vec<StateId> = level
                .iter()
                .flat_map(|id| (1..=CARD_COUNT).filter_map(move |card| add_card(*id, card)))
                .collect();
            next.sort_unstable();
            next.dedup();
            self.states.extend_from_slice(&next);
            level = next;
        }
    }

    /// row offset of a state
    fn row(&self, id: StateId) -> u32 {
        let idx = self
            .states
            .binary_search(&id)
            .unwrap_or_else(|_| panic!("state {:#x} was never enumerated", id));
        (idx * ROW_SIZE + ROW_SIZE) as u32
    }

    /// strength of the best five cards in a state with 5 to 7 cards
    fn evaluate(&self, id: StateId) -> u32 {
        let mut rank_counts = [0u8; 13];
        let mut suited = [0u16; 4];
        for c in state_cards(id) {
            let rank = (c >> 4) - 1;
            rank_counts[usize::from(rank)] += 1;
            let suit = c & 0xf;
            if suit != 0 {
                suited[usize::from(suit - 1)] |= 1 << rank;
            }
        }
        self.values.strength(hand_key(&rank_counts, &suited))
    }

    /// Generates the full lookup table
    pub fn generate(mut self) -> Vec<u32> {
        self.enumerate_states();

        let mut table = vec![0u32; (self.states.len() + 1) * ROW_SIZE];
        for (idx, id) in self.states.iter().enumerate() {
            let row = idx * ROW_SIZE + ROW_SIZE;
            let n_cards = state_cards(*id).count();
            for card in 1..=CARD_COUNT {
                // impossible hands stay at 0 and fall into the dead row
                if let Some(next) = add_card(*id, card) {
                    table[row + usize::from(card)] = if n_cards == MAX_STATE_CARDS {
                        self.evaluate(next)
                    } else {
                        self.row(next)
                    };
                }
            }
            // 5 and 6 card states can be evaluated on their own
            if n_cards >= 5 {
                table[row] = self.evaluate(*id);
            }
        }
        table
    }

    /// number of states found so far
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl Default for RankTableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the chained lookup table for 7 card evaluation
pub fn generate_rank_table() -> Vec<u32> {
    RankTableGenerator::new().generate()
}
