//! Fixed-depth minimax over material.
//!
//! No pruning, no move ordering, no transposition table: every line is
//! enumerated to the full depth, so cost grows as roughly 30^depth. Depth 2
//! answers instantly; depth 4 already takes seconds. Add alpha-beta before
//! raising the default.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    SearchResult,
    attacks::in_check,
    board::Board,
    eval::material,
    movegen::all_legal_moves,
    types::{Color, Move},
};

/// Score of a mated side, far outside any material total.
pub const MATE_SCORE: i32 = 100_000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 2;

/// Picks a move for `color`, choosing uniformly among equally scored best
/// moves. Returns `None` when `color` has no legal move.
///
/// A depth of 0 is searched as depth 1.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    depth: u8,
    rng: &mut R,
) -> Option<SearchResult> {
    let mut tmp = board.clone();
    let moves = all_legal_moves(&mut tmp, color);
    if moves.is_empty() {
        return None;
    }

    let depth = depth.max(1);
    let mut nodes = 0u64;
    let mut best_score = i32::MIN;
    let mut best: Vec<Move> = Vec::new();

    for mv in moves {
        let score = score_root_move(&mut tmp, mv, color, depth, &mut nodes);
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(mv);
        }
    }

    let best_move = *best.choose(rng)?;
    Some(SearchResult {
        best_move,
        score: best_score,
        depth,
        nodes,
        tied: best.len(),
    })
}

/// Minimax value for `color` of playing `mv` now and searching the reply
/// tree to `depth` plies in total. The board is restored before returning.
pub fn score_root_move(
    board: &mut Board,
    mv: Move,
    color: Color,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    let snap = board.snapshot();
    board.apply(mv);
    let score = minimax(board, depth.saturating_sub(1), color.other(), color, nodes);
    board.restore(&snap);
    score
}

/// Minimax value for `color` with `mover` to play and `depth` plies left.
///
/// Leaves are scored by material. A mover without moves scores as mated
/// (sign depending on who is mated) when in check, and 0 for stalemate.
pub fn minimax(board: &mut Board, depth: u8, mover: Color, color: Color, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return material(board, color);
    }

    let moves = all_legal_moves(board, mover);
    if moves.is_empty() {
        if !in_check(board, mover) {
            return 0;
        }
        return if mover == color {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }

    let maximizing = mover == color;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let snap = board.snapshot();
        board.apply(mv);
        let score = minimax(board, depth - 1, mover.other(), color, nodes);
        board.restore(&snap);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
