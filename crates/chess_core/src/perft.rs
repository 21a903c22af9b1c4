use crate::{board::Board, movegen::all_legal_moves};

/// Counts move paths of exactly `depth` plies from the current position.
///
/// Promotions count once (always to a queen) and there is no en passant,
/// so published perft figures only match at depths where neither occurs.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = board.side_to_move;
    let moves = all_legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let snap = board.snapshot();
        board.apply(mv);
        nodes += perft(board, depth - 1);
        board.restore(&snap);
    }
    nodes
}
