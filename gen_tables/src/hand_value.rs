//! Best five card hand values for 5, 6 and 7 card hands.
//!
//! A hand is first reduced to a sparse key (category plus the ranks that
//! break ties inside the category), then the key is mapped to a dense
//! strength `category << 12 | rank_within_category` so that the 7462
//! distinct poker hands get consecutive values inside each category.

const RANK_COUNT: usize = 13;

pub const HAND_CATEGORY_SHIFT: u32 = 12;

const KEY_CATEGORY_SHIFT: u32 = 20;
const KEY_RANK_SHIFTS: [u32; 5] = [16, 12, 8, 4, 0];

// Hand Categories
const HIGH_CARD: u32 = 1;
const PAIR: u32 = 2;
const TWO_PAIR: u32 = 3;
const THREE_OF_A_KIND: u32 = 4;
const STRAIGHT: u32 = 5;
const FLUSH: u32 = 6;
const FULL_HOUSE: u32 = 7;
const FOUR_OF_A_KIND: u32 = 8;
const STRAIGHT_FLUSH: u32 = 9;

/// A-2-3-4-5
const WHEEL_MASK: u16 = 0x100f;

/// number of distinct five card hands
pub const DISTINCT_HANDS: usize = 7462;

/// return index of highest straight card in a rank mask
fn get_biggest_straight(rank_mask: u16) -> Option<u8> {
    for high in (4..RANK_COUNT).rev() {
        if (rank_mask >> (high - 4)) & 0x1f == 0x1f {
            return Some(high as u8);
        }
    }
    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(3);
    }
    None
}

fn pack(category: u32, ranks: &[u8]) -> u32 {
    let mut key = category << KEY_CATEGORY_SHIFT;
    for (r, shift) in ranks.iter().zip(KEY_RANK_SHIFTS.iter()) {
        key |= u32::from(*r) << shift;
    }
    key
}

/// `lead` ranks followed by the `n` highest other ranks in the hand
fn with_kickers(lead: &[u8], rank_counts: &[u8; RANK_COUNT], n: usize) -> Vec<u8> {
    let mut ranks = lead.to_vec();
    ranks.extend(
        (0..RANK_COUNT as u8)
            .rev()
            .filter(|r| rank_counts[usize::from(*r)] > 0 && !lead.contains(r))
            .take(n),
    );
    ranks
}

fn ranks_with_count(rank_counts: &[u8; RANK_COUNT], count: u8) -> Vec<u8> {
    (0..RANK_COUNT as u8)
        .rev()
        .filter(|r| rank_counts[usize::from(*r)] == count)
        .collect()
}

/// Sparse key of the best five card hand
///
/// # Arguments
///
/// * `rank_counts` number of cards of each rank
/// * `suited` rank masks of each suit, only suits that can still
///   make a flush need to be filled in
pub fn hand_key(rank_counts: &[u8; RANK_COUNT], suited: &[u16; 4]) -> u32 {
    let mut flush = None;
    for mask in suited {
        if mask.count_ones() >= 5 {
            if let Some(high) = get_biggest_straight(*mask) {
                return pack(STRAIGHT_FLUSH, &[high]);
            }
            let top: Vec<u8> = (0..RANK_COUNT as u8)
                .rev()
                .filter(|r| mask & (1u16 << *r) != 0)
                .take(5)
                .collect();
            flush = Some(pack(FLUSH, &top));
        }
    }

    let quads = ranks_with_count(rank_counts, 4);
    if let Some(&q) = quads.first() {
        return pack(FOUR_OF_A_KIND, &with_kickers(&[q], rank_counts, 1));
    }

    let trips = ranks_with_count(rank_counts, 3);
    let pairs = ranks_with_count(rank_counts, 2);
    if let Some(&t) = trips.first() {
        // a second set of trips plays as the pair
        let full = trips.get(1).into_iter().chain(pairs.first()).max();
        if let Some(&p) = full {
            return pack(FULL_HOUSE, &[t, p]);
        }
    }

    if let Some(key) = flush {
        return key;
    }

    let rank_mask = (0..RANK_COUNT)
        .filter(|r| rank_counts[*r] > 0)
        .fold(0u16, |m, r| m | (1 << r));
    if let Some(high) = get_biggest_straight(rank_mask) {
        return pack(STRAIGHT, &[high]);
    }

    if let Some(&t) = trips.first() {
        return pack(THREE_OF_A_KIND, &with_kickers(&[t], rank_counts, 2));
    }
    if pairs.len() >= 2 {
        let (p1, p2) = (pairs[0], pairs[1]);
        return pack(TWO_PAIR, &with_kickers(&[p1, p2], rank_counts, 1));
    }
    if let Some(&p) = pairs.first() {
        return pack(PAIR, &with_kickers(&[p], rank_counts, 3));
    }
    pack(HIGH_CARD, &with_kickers(&[], rank_counts, 5))
}

/// Maps sparse hand keys to dense strengths
pub struct HandValues {
    /// sorted keys of every distinct five card hand
    keys: Vec<u32>,
    /// index of the first key of each category
    category_start: [usize; 10],
}

impl HandValues {
    /// enumerate every five card rank multiset, suited and offsuit
    pub fn new() -> Self {
        let mut keys = Vec::with_capacity(2 * DISTINCT_HANDS);
        let mut rank_counts = [0u8; RANK_COUNT];
        Self::populate(&mut keys, &mut rank_counts, 0, 5);
        keys.sort_unstable();
        keys.dedup();

        let mut category_start = [0usize; 10];
        for (i, key) in keys.iter().enumerate().rev() {
            category_start[(key >> KEY_CATEGORY_SHIFT) as usize] = i;
        }

        HandValues {
            keys,
            category_start,
        }
    }

    fn populate(keys: &mut Vec<u32>, rank_counts: &mut [u8; RANK_COUNT], rank: usize, left: u8) {
        if rank == RANK_COUNT {
            if left != 0 {
                return;
            }
            keys.push(hand_key(rank_counts, &[0; 4]));
            if rank_counts.iter().all(|c| *c <= 1) {
                let mask = (0..RANK_COUNT)
                    .filter(|r| rank_counts[*r] == 1)
                    .fold(0u16, |m, r| m | (1 << r));
                keys.push(hand_key(rank_counts, &[mask, 0, 0, 0]));
            }
            return;
        }
        for count in 0..=left.min(4) {
            rank_counts[rank] = count;
            Self::populate(keys, rank_counts, rank + 1, left - count);
        }
        rank_counts[rank] = 0;
    }

    /// number of distinct hands
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// dense strength of the hand
    ///
    /// Panics if the key does not belong to a five card hand.
    pub fn strength(&self, key: u32) -> u32 {
        let idx = self
            .keys
            .binary_search(&key)
            .unwrap_or_else(|_| panic!("invalid hand key {:#x}", key));
        let category = key >> KEY_CATEGORY_SHIFT;
        let rank = idx - self.category_start[category as usize] + 1;
        (category << HAND_CATEGORY_SHIFT) | rank as u32
    }

    /// dense strength of a hand given as card codes 1..=52
    pub fn strength_of_cards(&self, cards: &[u8]) -> u32 {
        let mut rank_counts = [0u8; RANK_COUNT];
        let mut suited = [0u16; 4];
        for c in cards {
            let (rank, suit) = ((c - 1) >> 2, (c - 1) & 3);
            rank_counts[usize::from(rank)] += 1;
            suited[usize::from(suit)] |= 1 << rank;
        }
        self.strength(hand_key(&rank_counts, &suited))
    }
}

impl Default for HandValues {
    fn default() -> Self {
        Self::new()
    }
}
