use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HAND_CATEGORY_SHIFT;

/// Strength of the best five cards of a hand
///
/// Higher is better and equal strengths are exactly tied hands. The
/// hand category sits above bit 12, the rank inside the category below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandStrength(u32);

impl HandStrength {
    pub const fn new(value: u32) -> Self {
        HandStrength(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// None for values a valid rank table never produces
    pub fn category(self) -> Option<HandCategory> {
        HandCategory::from_index(self.0 >> HAND_CATEGORY_SHIFT)
    }
}

impl From<u32> for HandStrength {
    fn from(value: u32) -> Self {
        HandStrength(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    pub fn from_index(index: u32) -> Option<Self> {
        use HandCategory::*;
        match index {
            1 => Some(HighCard),
            2 => Some(Pair),
            3 => Some(TwoPair),
            4 => Some(ThreeOfAKind),
            5 => Some(Straight),
            6 => Some(Flush),
            7 => Some(FullHouse),
            8 => Some(FourOfAKind),
            9 => Some(StraightFlush),
            _ => None,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };
        write!(f, "{}", name)
    }
}
