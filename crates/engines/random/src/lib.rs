//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - A beginner-strength opponent
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Board, Color, Engine, SearchResult, all_legal_moves, material};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. The reported score is the current
/// material balance, for display only.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, color: Color, _depth: u8) -> Option<SearchResult> {
        let mut tmp = board.clone();
        let moves = all_legal_moves(&mut tmp, color);
        let best_move = *moves.choose(&mut self.rng)?;

        debug!(engine = self.name(), candidates = moves.len(), best = %best_move, "picked move");
        Some(SearchResult {
            best_move,
            score: material(board, color),
            depth: 0,
            nodes: 1,
            tied: moves.len(),
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
