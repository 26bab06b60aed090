use serde::{Deserialize, Serialize};

use super::{Query, Tally};

/// Result of one equity calculation for a single player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEquity {
    /// hole cards as tokens, e.g. `"Kd Qd"`
    pub hole_cards: String,
    pub wins: u64,
    pub win_ratio: f64,
    pub ties: u64,
    pub tie_ratio: f64,
    pub losses: u64,
    pub loss_ratio: f64,
    /// average share of the pot
    pub ev: f64,
    /// pot units won, out of `POT_UNITS` per enumeration
    pub pot_units: u64,
}

/// Equities of every player, in the order the hands were given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    /// number of board completions enumerated
    pub enumerations: u64,
    pub board: Vec<String>,
    pub players: Vec<PlayerEquity>,
}

impl EquitySummary {
    pub fn new(query: &Query, tally: &Tally) -> Self {
        let m = tally.outcomes();
        let ratio = |count: u64| {
            if m == 0 {
                0.0
            } else {
                count as f64 / m as f64
            }
        };
        let players = query
            .hands()
            .iter()
            .enumerate()
            .map(|(p, hand)| PlayerEquity {
                hole_cards: format!("{} {}", hand[0], hand[1]),
                wins: tally.wins()[p],
                win_ratio: ratio(tally.wins()[p]),
                ties: tally.ties()[p],
                tie_ratio: ratio(tally.ties()[p]),
                losses: tally.losses()[p],
                loss_ratio: ratio(tally.losses()[p]),
                ev: tally.ev(p),
                pot_units: tally.units()[p],
            })
            .collect();
        EquitySummary {
            enumerations: m,
            board: query.board().iter().map(|c| c.to_string()).collect(),
            players,
        }
    }

    /// Players ordered by descending EV, hands with equal EV keep their
    /// input order
    pub fn ranked(&self) -> Vec<&PlayerEquity> {
        let mut players: Vec<&PlayerEquity> = self.players.iter().collect();
        players.sort_by(|a, b| b.pot_units.cmp(&a.pot_units));
        players
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
