use crate::constants::*;
use crate::error::EquityError;
use crate::hand_evaluator::HandStrength;

/// Strength of every player on every board completion
///
/// Stored outcome by outcome: the `players` strengths of outcome `m` are
/// contiguous, so a range of outcomes can be handed to a worker as one
/// mutable slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthMatrix {
    players: usize,
    outcomes: usize,
    strengths: Vec<HandStrength>,
}

impl StrengthMatrix {
    pub fn new(players: usize, outcomes: usize) -> Self {
        StrengthMatrix {
            players,
            outcomes,
            strengths: vec![HandStrength::new(0); players * outcomes],
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn outcomes(&self) -> usize {
        self.outcomes
    }

    #[inline]
    pub fn get(&self, player: usize, outcome: usize) -> HandStrength {
        self.strengths[outcome * self.players + player]
    }

    pub fn set(&mut self, player: usize, outcome: usize, strength: HandStrength) {
        self.strengths[outcome * self.players + player] = strength;
    }

    /// Strengths of all players for one outcome
    pub fn outcome(&self, outcome: usize) -> &[HandStrength] {
        let start = outcome * self.players;
        &self.strengths[start..start + self.players]
    }

    /// Splits the matrix into runs of at most `outcomes_per_chunk`
    /// outcomes, each paired with the index of its first outcome
    pub fn chunks_mut(
        &mut self,
        outcomes_per_chunk: usize,
    ) -> impl Iterator<Item = (usize, &mut [HandStrength])> + '_ {
        let outcomes_per_chunk = outcomes_per_chunk.max(1);
        self.strengths
            .chunks_mut(outcomes_per_chunk * self.players.max(1))
            .enumerate()
            .map(move |(i, chunk)| (i * outcomes_per_chunk, chunk))
    }
}

/// Win, tie and loss counts per player over a set of outcomes
///
/// Each outcome hands out `POT_UNITS` units split evenly between its
/// winners. Any number of winners up to `MAX_PLAYERS` divides it exactly,
/// so the units of all players always add up to `POT_UNITS * outcomes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    losses: Vec<u64>,
    units: Vec<u64>,
    outcomes: u64,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Tally {
            wins: vec![0; players],
            ties: vec![0; players],
            losses: vec![0; players],
            units: vec![0; players],
            outcomes: 0,
        }
    }

    /// Reduces every outcome of a matrix
    pub fn from_matrix(matrix: &StrengthMatrix) -> Result<Self, EquityError> {
        let mut tally = Tally::new(matrix.players());
        for m in 0..matrix.outcomes() {
            tally.add_outcome(matrix.outcome(m))?;
        }
        Ok(tally)
    }

    /// Reduces consecutive outcomes of `players` strengths each
    pub fn from_strengths(players: usize, strengths: &[HandStrength]) -> Result<Self, EquityError> {
        if players == 0 || strengths.len() % players != 0 {
            return Err(EquityError::MalformedOutcome {
                players,
                strengths: strengths.len(),
            });
        }
        let mut tally = Tally::new(players);
        for outcome in strengths.chunks(players) {
            tally.add_outcome(outcome)?;
        }
        Ok(tally)
    }

    /// Players holding the highest strength share the outcome
    ///
    /// The tally is left untouched unless there is exactly one strength
    /// per player and no more than `MAX_PLAYERS` players.
    pub fn add_outcome(&mut self, strengths: &[HandStrength]) -> Result<(), EquityError> {
        if strengths.len() != self.players() || strengths.len() > MAX_PLAYERS {
            return Err(EquityError::MalformedOutcome {
                players: self.players(),
                strengths: strengths.len(),
            });
        }
        let best = match strengths.iter().max() {
            Some(best) => *best,
            None => return Ok(()),
        };
        let winners = strengths.iter().filter(|s| **s == best).count();
        let share = POT_UNITS / winners as u64;
        for (p, s) in strengths.iter().enumerate() {
            if *s == best {
                self.units[p] += share;
                if winners == 1 {
                    self.wins[p] += 1;
                } else {
                    self.ties[p] += 1;
                }
            } else {
                self.losses[p] += 1;
            }
        }
        self.outcomes += 1;
        Ok(())
    }

    pub fn merge(&mut self, other: &Tally) {
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
        for (a, b) in self.ties.iter_mut().zip(&other.ties) {
            *a += b;
        }
        for (a, b) in self.losses.iter_mut().zip(&other.losses) {
            *a += b;
        }
        for (a, b) in self.units.iter_mut().zip(&other.units) {
            *a += b;
        }
        self.outcomes += other.outcomes;
    }

    pub fn players(&self) -> usize {
        self.wins.len()
    }

    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    pub fn wins(&self) -> &[u64] {
        &self.wins
    }

    pub fn ties(&self) -> &[u64] {
        &self.ties
    }

    pub fn losses(&self) -> &[u64] {
        &self.losses
    }

    /// pot units won by each player
    pub fn units(&self) -> &[u64] {
        &self.units
    }

    /// Share of the pot a player wins on average, 0 without outcomes
    pub fn ev(&self, player: usize) -> f64 {
        if self.outcomes == 0 {
            return 0.0;
        }
        self.units[player] as f64 / (POT_UNITS * self.outcomes) as f64
    }
}
