pub mod attacks;
pub mod board;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{in_check, is_square_attacked};
pub use board::*;
pub use eval::material;
pub use movegen::*;
pub use notation::{NotationError, parse_coord_move};
pub use perft::perft;
pub use search::{DEFAULT_DEPTH, MATE_SCORE, choose_move, minimax};
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every opponent (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move
    pub best_move: Move,
    /// Minimax score in pawn units from the searching side's perspective
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u8,
    /// Positions visited
    pub nodes: u64,
    /// How many root moves shared the best score
    pub tied: usize,
}

/// Trait that all opponents implement, so the session can swap them freely.
pub trait Engine: Send {
    /// Choose a move for `color` on `board`, searching `depth` plies where
    /// the engine searches at all. `None` means `color` has no legal move.
    fn search(&mut self, board: &Board, color: Color, depth: u8) -> Option<SearchResult>;

    /// Short human-readable name, used in logs and the host's status line.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
