//! Raw attack patterns and square-attack detection.
//!
//! Attacks here are what a piece *threatens*, not where it may legally go:
//! no turn order, no check-safety, and pawns only ever strike diagonally.
//! This keeps the detector non-recursive so legality filtering can build on it.

use crate::{board::Board, types::*};

/// (row, col) offsets of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// (row, col) offsets of the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if any piece of `by` attacks `target` under its raw movement pattern.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // An attacking pawn sits one step *behind* the target from its own point of view.
    let back = -by.forward();
    if holds(target.offset(back, -1), &[PieceKind::Pawn])
        || holds(target.offset(back, 1), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(target.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(target.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    let sliders = [
        (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, kinds) in sliders {
        for &(dr, dc) in dirs.iter() {
            if let Some(blocker) = first_piece_along(board, target, dr, dc)
                && blocker.color == by
                && kinds.contains(&blocker.kind)
            {
                return true;
            }
        }
    }

    false
}

/// First occupied square walking from `from` (exclusive) in one direction.
fn first_piece_along(board: &Board, from: Square, dr: i8, dc: i8) -> Option<Piece> {
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if let Some(pc) = board.piece_at(sq) {
            return Some(pc);
        }
        cur = sq.offset(dr, dc);
    }
    None
}

/// True if `color`'s king is attacked. A board without that king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => is_square_attacked(board, ksq, color.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
