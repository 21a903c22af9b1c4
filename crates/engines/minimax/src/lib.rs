//! Minimax Chess Engine
//!
//! Fixed-depth minimax over material, choosing uniformly among equally good
//! moves. This is the default opponent.

use chess_core::{Board, Color, Engine, SearchResult, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;


/// Minimax opponent. Owns its RNG so a seeded engine replays identically.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    /// Engine whose tie-breaks are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, color: Color, depth: u8) -> Option<SearchResult> {
        let result = choose_move(board, color, depth, &mut self.rng);
        self.nodes = result.as_ref().map_or(0, |r| r.nodes);

        if let Some(r) = &result {
            debug!(
                engine = self.name(),
                depth = r.depth,
                nodes = r.nodes,
                score = r.score,
                tied = r.tied,
                best = %r.best_move,
                "search finished"
            );
        }
        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
