/// Number of cards in standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a sandard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits
pub const SUIT_COUNT: u8 = 4;

/// rank index to char table
pub const RANK_TO_CHAR: &[char; 13] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// suit index to char table
pub const SUIT_TO_CHAR: &[char; 4] = &['c', 'd', 'h', 's'];

/// Hole cards per player
pub const HOLE_CARDS: usize = 2;

/// Community cards on a complete board
pub const BOARD_CARDS: usize = 5;

/// Most community cards known when a query starts
pub const MAX_KNOWN_BOARD_CARDS: usize = 4;

/// Cards making up a final hand
pub const HAND_CARDS: usize = HOLE_CARDS + BOARD_CARDS;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Offset of the empty hand row in the rank table
pub const RANK_TABLE_SEED: u32 = 53;

/// divide a strength by 4096 to obtain the hand category
pub const HAND_CATEGORY_SHIFT: u32 = 12;

/// Pot units handed out per outcome, divisible by any number of winners
/// from 1 to MAX_PLAYERS
pub const POT_UNITS: u64 = 2520;
