use crate::{board::Board, types::*};

/// Material balance from `color`'s point of view, in pawn units.
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .squares
        .iter()
        .flatten()
        .map(|pc| {
            let v = pc.kind.value();
            if pc.color == color { v } else { -v }
        })
        .sum()
}
