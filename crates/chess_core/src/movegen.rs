use crate::{
    attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, in_check, is_square_attacked},
    board::Board,
    types::*,
};

/// Column the king starts on for both colors.
const KING_HOME_COL: u8 = 4;

/// Legal destinations for the piece on `from`, cloning the board only once.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(32);
    legal_moves_into(&mut tmp, from, &mut out);
    out
}

/// Legal destinations for the piece on `from`, written into `out`.
///
/// Every pseudo-move is played on the board, the mover's king is probed for
/// attacks, and the snapshot is restored whatever the verdict. The board is
/// left exactly as it was handed in.
pub fn legal_moves_into(board: &mut Board, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    pseudo_moves_into(board, from, out);

    out.retain(|&to| {
        let Some(mv) = board.build_move(from, to, Some(PieceKind::Queen)) else {
            return false;
        };
        let snap = board.snapshot();
        let safe = board.apply(mv).is_some() && !in_check(board, pc.color);
        board.restore(&snap);
        safe
    });
}

/// Every legal move for `color`, with engine promotion (always Queen).
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let origins: Vec<Square> = board.pieces(color).map(|(sq, _)| sq).collect();
    let mut moves = Vec::with_capacity(64);
    let mut dests = Vec::with_capacity(32);
    for from in origins {
        legal_moves_into(board, from, &mut dests);
        moves.extend(
            dests
                .iter()
                .filter_map(|&to| board.build_move(from, to, Some(PieceKind::Queen))),
        );
    }
    moves
}

/// True as soon as one piece of `color` has a legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let origins: Vec<Square> = board.pieces(color).map(|(sq, _)| sq).collect();
    let mut dests = Vec::with_capacity(32);
    origins.into_iter().any(|from| {
        legal_moves_into(board, from, &mut dests);
        !dests.is_empty()
    })
}

/// Pseudo-legal destinations for the piece on `from`: raw movement rules,
/// own pieces and the enemy king excluded, own-king safety ignored.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);
    pseudo_moves_into(board, from, &mut out);
    out
}

fn pseudo_moves_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, out, &KNIGHT_OFFSETS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &DIAGONALS);
            gen_slider(board, from, pc.color, out, &ORTHOGONALS);
        }
        PieceKind::King => {
            gen_steps(board, from, pc.color, out, &KING_OFFSETS);
            gen_castle(board, from, pc.color, out);
        }
    }
}

/// A square the mover may land on: empty, or an enemy piece other than the king.
fn landable(board: &Board, to: Square, c: Color) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(pc) => pc.color != c && pc.kind != PieceKind::King,
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the starting row
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);
        if from.row == c.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // diagonal captures only onto an enemy piece; no en passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && board.piece_at(to).is_some()
            && landable(board, to, c)
        {
            out.push(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc)
            && landable(board, to, c)
        {
            out.push(to);
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(_) => {
                    if landable(board, to, c) {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    for side in CastleSide::BOTH {
        if can_castle(board, from, c, side) {
            out.push(Square::new(c.home_row(), side.king_to_col()));
        }
    }
}

/// All castling prerequisites for `c` on `side`, the king standing on `from`.
pub fn can_castle(board: &Board, from: Square, c: Color, side: CastleSide) -> bool {
    let row = c.home_row();
    if from != Square::new(row, KING_HOME_COL) || !board.castling.allows(c, side) {
        return false;
    }

    let rook_sq = Square::new(row, side.rook_col());
    if board.piece_at(rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
        return false;
    }

    let (lo, hi) = if side.rook_col() < KING_HOME_COL {
        (side.rook_col() + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, side.rook_col())
    };
    if (lo..hi).any(|col| board.piece_at(Square::new(row, col)).is_some()) {
        return false;
    }

    // Covers "not in check": the king's own square is the first one probed.
    let enemy = c.other();
    let king_to = side.king_to_col();
    let pass = (KING_HOME_COL + king_to) / 2;
    [KING_HOME_COL, pass, king_to]
        .into_iter()
        .all(|col| !is_square_attacked(board, Square::new(row, col), enemy))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
