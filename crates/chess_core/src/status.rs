//! Outcome classification for the side to move.

use serde::{Deserialize, Serialize};

use crate::{
    attacks::in_check,
    board::Board,
    movegen::has_legal_move,
    types::{Color, PieceKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawInsufficientMaterial,
}

impl GameOutcome {
    /// No further moves are played once one of these is reached.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameOutcome::Checkmate | GameOutcome::Stalemate | GameOutcome::DrawInsufficientMaterial
        )
    }
}

/// Classifies the position for `side`.
///
/// Precedence: checkmate, stalemate, insufficient material, check, ongoing.
pub fn classify(board: &mut Board, side: Color) -> GameOutcome {
    let checked = in_check(board, side);
    let can_move = has_legal_move(board, side);

    match (checked, can_move) {
        (true, false) => GameOutcome::Checkmate,
        (false, false) => GameOutcome::Stalemate,
        _ if is_insufficient_material(board) => GameOutcome::DrawInsufficientMaterial,
        (true, true) => GameOutcome::Check,
        (false, true) => GameOutcome::Ongoing,
    }
}

/// Bare kings, or a single bishop or knight beside them. Anything more is
/// treated as mating material, including two minors.
pub fn is_insufficient_material(board: &Board) -> bool {
    match board.material_census().as_slice() {
        [] => true,
        [PieceKind::Bishop] | [PieceKind::Knight] => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
