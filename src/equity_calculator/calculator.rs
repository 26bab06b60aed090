use std::sync::Arc;

use log::debug;

use super::{EquitySummary, Query, StrengthMatrix, Tally};
use crate::board_enumerator::{BoardTables, Completions};
use crate::config::EngineConfig;
use crate::constants::*;
use crate::error::{EquityError, TableError};
use crate::hand_evaluator::{HandStrength, RankTable};

/// Exact equity calculator
///
/// Holds the two lookup tables behind `Arc`s, so a calculator is cheap to
/// clone and can serve any number of concurrent queries.
///
/// # Example
///
/// ```
/// use holdem_equity::config::EngineConfig;
/// use holdem_equity::equity_calculator::EquityCalculator;
///
/// let calc = EquityCalculator::from_config(&EngineConfig::default()).unwrap();
/// let summary = calc
///     .calculate(&[vec!["Ac", "Ad"], vec!["Kh", "Ks"]], &["2c", "7d", "9s", "Tc"])
///     .unwrap();
/// assert_eq!(summary.enumerations, 44);
/// assert!(summary.players[0].ev > summary.players[1].ev);
/// ```
#[derive(Debug, Clone)]
pub struct EquityCalculator {
    ranks: Arc<RankTable>,
    boards: Arc<BoardTables>,
    threads: usize,
}

impl EquityCalculator {
    pub fn new(ranks: Arc<RankTable>, boards: Arc<BoardTables>) -> Self {
        EquityCalculator {
            ranks,
            boards,
            threads: num_cpus::get(),
        }
    }

    /// Loads both tables from the configured paths
    pub fn from_config(config: &EngineConfig) -> Result<Self, EquityError> {
        let ranks = RankTable::load(&config.rank_table)?;
        let boards = BoardTables::load(&config.board_table)?;
        Ok(EquityCalculator::new(Arc::new(ranks), Arc::new(boards)).with_threads(config.threads))
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn rank_table(&self) -> &RankTable {
        &self.ranks
    }

    pub fn board_tables(&self) -> &BoardTables {
        &self.boards
    }

    /// Validates the card tokens and runs the enumeration
    pub fn calculate<S: AsRef<str>>(
        &self,
        hands: &[Vec<S>],
        board: &[S],
    ) -> Result<EquitySummary, EquityError> {
        let query = Query::parse(hands, board)?;
        self.calculate_query(&query)
    }

    pub fn calculate_query(&self, query: &Query) -> Result<EquitySummary, EquityError> {
        let (_, tally) = self.enumerate(query)?;
        Ok(EquitySummary::new(query, &tally))
    }

    /// The strength of every player on every legal completion
    pub fn strengths(&self, query: &Query) -> Result<StrengthMatrix, EquityError> {
        let (matrix, _) = self.enumerate(query)?;
        Ok(matrix)
    }

    fn enumerate(&self, query: &Query) -> Result<(StrengthMatrix, Tally), EquityError> {
        let cards_to_come = query.cards_to_come();
        let completions = self.boards.completions(cards_to_come, query.used())?;
        let n_players = query.n_players();

        // chain position after hole cards and known board, per player
        let prefixes = (0..n_players)
            .map(|p| self.ranks.prefix(&query.known_codes(p)))
            .collect::<Result<Vec<u32>, TableError>>()?;

        let n_outcomes = completions.columns();
        let n_threads = self.threads.min(n_outcomes).max(1);
        let outcomes_per_chunk = (n_outcomes + n_threads - 1) / n_threads;
        debug!(
            "enumerating {} players, {} board cards, {} to come: {} completions on {} threads",
            n_players,
            query.board().len(),
            cards_to_come,
            n_outcomes,
            n_threads
        );

        let mut matrix = StrengthMatrix::new(n_players, n_outcomes);
        let ranks: &RankTable = &self.ranks;
        let completions = &completions;
        let prefixes = &prefixes;

        let results = crossbeam::scope(|scope| {
            let handles: Vec<_> = matrix
                .chunks_mut(outcomes_per_chunk)
                .map(|(first, chunk)| {
                    scope.spawn(move |_| -> Result<Tally, EquityError> {
                        fill_chunk(ranks, prefixes, completions, first, chunk)?;
                        Tally::from_strengths(prefixes.len(), chunk)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join()).collect::<Vec<_>>()
        })
        .map_err(|_| EquityError::WorkerPanicked)?;

        let mut tally = Tally::new(n_players);
        for result in results {
            let batch = result.map_err(|_| EquityError::WorkerPanicked)??;
            tally.merge(&batch);
        }
        Ok((matrix, tally))
    }
}

/// Evaluates the outcomes starting at `first`, `chunk` holds one row of
/// player strengths per outcome
fn fill_chunk(
    ranks: &RankTable,
    prefixes: &[u32],
    completions: &Completions,
    first: usize,
    chunk: &mut [HandStrength],
) -> Result<(), TableError> {
    let mut cards = [0u8; BOARD_CARDS];
    let board = &mut cards[..completions.rows()];
    for (i, outcome) in chunk.chunks_mut(prefixes.len()).enumerate() {
        completions.board(first + i, board);
        for (strength, prefix) in outcome.iter_mut().zip(prefixes) {
            *strength = ranks.finish(*prefix, board)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_enumerator::{binomial, CompletionTable};
    use crate::card::Card;
    use crate::test_tables::{calculator, identity_rank_table, init_logging};

    fn assert_invariants(summary: &EquitySummary) {
        let m = summary.enumerations;
        let mut units = 0;
        let mut ev = 0.0;
        for p in &summary.players {
            assert_eq!(p.wins + p.ties + p.losses, m, "{}", p.hole_cards);
            assert!(p.ev >= 0.0 && p.ev <= 1.0);
            units += p.pot_units;
            ev += p.ev;
        }
        assert_eq!(units, POT_UNITS * m);
        assert!((ev - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_aces_vs_kings() {
        init_logging();
        let summary = calculator()
            .calculate(&[vec!["As", "Ah"], vec!["Ks", "Kh"]], &[])
            .unwrap();
        assert_eq!(summary.enumerations, binomial(48, 5));
        assert_invariants(&summary);
        let aces = summary.players[0].ev;
        let kings = summary.players[1].ev;
        assert!(aces > 0.82 && aces < 0.83, "aces ev {}", aces);
        assert!(kings > 0.17 && kings < 0.18, "kings ev {}", kings);
        assert_eq!(summary.ranked()[0].hole_cards, "As Ah");
    }

    #[test]
    fn test_aces_vs_kings_no_shared_suits() {
        // with no suit in common the aces block none of the kings flushes
        let summary = calculator()
            .calculate(&[vec!["Ac", "Ad"], vec!["Kh", "Ks"]], &[])
            .unwrap();
        assert_invariants(&summary);
        let aces = summary.players[0].ev;
        assert!((aces - 0.8126).abs() < 0.0005, "aces ev {}", aces);
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let err = calculator()
            .calculate(&[vec!["Ad", "Kd"], vec!["Ad", "Ks"]], &[])
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_shared_two_pair() {
        init_logging();
        let summary = calculator()
            .calculate(&[vec!["7c", "2d"], vec!["7h", "2h"]], &["7s", "2s", "Ah"])
            .unwrap();
        assert_eq!(summary.enumerations, binomial(45, 2));
        assert_invariants(&summary);
        // 7c 2d can only tie, 7h 2h also wins with runner runner hearts
        assert_eq!(summary.players[0].wins, 0);
        assert!(summary.players[1].wins > 0);
        assert_eq!(summary.players[0].ties, summary.players[1].ties);
        for p in &summary.players {
            assert!((p.ev - 0.5).abs() < 0.03, "{} ev {}", p.hole_cards, p.ev);
        }
    }

    #[test]
    fn test_ten_players() {
        init_logging();
        let hands: Vec<Vec<String>> = [
            "Ac Ad", "Kh Ks", "Qc Qd", "Jh Js", "Tc Td", "9h 9s", "8c 8d", "7h 7s", "6c 6d", "5h 5s",
        ]
        .iter()
        .map(|h| h.split(' ').map(String::from).collect())
        .collect();
        let board: Vec<String> = vec![];
        let summary = calculator().calculate(&hands, &board).unwrap();
        assert_eq!(summary.enumerations, 201_376);
        assert_invariants(&summary);
    }

    #[test]
    fn test_river_to_come() {
        let summary = calculator()
            .calculate(
                &[vec!["Ac", "Ad"], vec!["Kh", "Ks"], vec!["8h", "9h"]],
                &["2c", "7d", "Th", "Jh"],
            )
            .unwrap();
        assert_eq!(summary.enumerations, 52 - 6 - 4);
        assert_invariants(&summary);
        // 8h 9h holds a straight already
        assert!(summary.players[2].ev > 0.7);
    }

    #[test]
    fn test_prefix_matches_full_evaluation() {
        let calc = calculator();
        let query = Query::parse(&[vec!["Qs", "Jd"], vec!["4c", "4h"]], &["As", "Ks", "5d"]).unwrap();
        let matrix = calc.strengths(&query).unwrap();
        let completions = calc
            .board_tables()
            .completions(query.cards_to_come(), query.used())
            .unwrap();
        assert_eq!(matrix.outcomes(), completions.columns());
        for m in (0..matrix.outcomes()).step_by(37) {
            let mut board = [0u8; 2];
            completions.board(m, &mut board);
            for p in 0..query.n_players() {
                let mut cards = [0u8; HAND_CARDS];
                let known = query.known_codes(p);
                cards[..known.len()].copy_from_slice(&known);
                cards[known.len()..].copy_from_slice(&board);
                assert_eq!(matrix.get(p, m), calc.rank_table().strength(&cards).unwrap());
            }
        }
    }

    #[test]
    fn test_thread_count_does_not_change_results() {
        let query = Query::parse(&[vec!["Ah", "Kh"], vec!["Qc", "Qs"], vec!["6d", "7d"]], &["Qh", "8d"]).unwrap();
        let single = calculator().with_threads(1).calculate_query(&query).unwrap();
        for threads in &[2, 3, 7, 64] {
            let multi = calculator().with_threads(*threads).calculate_query(&query).unwrap();
            assert_eq!(multi, single);
        }
    }

    #[test]
    fn test_synthetic_tables() {
        // identity rank table: a hand is worth the sum of its codes
        let ranks = Arc::new(identity_rank_table());
        let codes: Vec<u8> = (1..=CARD_COUNT).collect();
        let boards = Arc::new(
            BoardTables::from_tables(vec![CompletionTable::new(1, codes).unwrap()]).unwrap(),
        );
        let calc = EquityCalculator::new(ranks, boards).with_threads(2);
        let hands = vec![
            [Card::from_code(1).unwrap(), Card::from_code(4).unwrap()],
            [Card::from_code(2).unwrap(), Card::from_code(3).unwrap()],
        ];
        let board: Vec<Card> = [10, 11, 12, 13].iter().map(|c| Card::from_code(*c).unwrap()).collect();
        let query = Query::new(hands, board).unwrap();
        let summary = calc.calculate_query(&query).unwrap();
        // equal sums on every river
        assert_eq!(summary.enumerations, 44);
        assert_eq!(summary.players[0].ties, 44);
        assert!((summary.players[0].ev - 0.5).abs() < 1e-12);

        // only rivers are available
        let query = Query::new(query.hands().to_vec(), vec![]).unwrap();
        let err = calc.calculate_query(&query).unwrap_err();
        assert!(err.is_corrupt_table());
    }

    #[test]
    fn test_no_legal_completions() {
        let ranks = Arc::new(identity_rank_table());
        let boards = Arc::new(
            BoardTables::from_tables(vec![CompletionTable::new(1, vec![1, 2, 3, 4]).unwrap()]).unwrap(),
        );
        let calc = EquityCalculator::new(ranks, boards);
        let err = calc
            .calculate(&[vec!["2c", "2d"], vec!["2h", "2s"]], &["Ac", "Ad", "Ah", "As"])
            .unwrap_err();
        assert!(matches!(err, EquityError::NoLegalCompletions { cards_to_come: 1 }));
    }

    #[test]
    fn test_corrupt_rank_table() {
        let ranks = Arc::new(RankTable::from_vec(vec![0; 200]).unwrap());
        let calc = EquityCalculator::new(ranks, crate::test_tables::BOARD_TABLES.clone());
        let err = calc
            .calculate(&[vec!["Ac", "Ad"], vec!["Kh", "Ks"]], &["2c", "7d", "9s", "Tc"])
            .unwrap_err();
        assert!(err.is_corrupt_table());
    }
}
