use crate::types::*;

/// Castling eligibility. A flag starts `true` and is cleared for good once the
/// king or that particular rook moves (or the rook is captured at home).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    king: [bool; 2],
    rooks: [[bool; 2]; 2],
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            king: [true; 2],
            rooks: [[true; 2]; 2],
        }
    }

    pub fn none() -> Self {
        Self {
            king: [false; 2],
            rooks: [[false; 2]; 2],
        }
    }

    /// Both the king and the rook on `side` are still unmoved.
    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        self.king[color.idx()] && self.rooks[color.idx()][side.idx()]
    }

    pub fn king_unmoved(&self, color: Color) -> bool {
        self.king[color.idx()]
    }

    pub fn rook_unmoved(&self, color: Color, side: CastleSide) -> bool {
        self.rooks[color.idx()][side.idx()]
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        self.king[color.idx()] = false;
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rooks[color.idx()][side.idx()] = false;
    }

    /// Grants the right for one side, as read from a FEN castling field.
    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        self.king[color.idx()] = true;
        self.rooks[color.idx()][side.idx()] = true;
    }
}

/// The live game board: piece grid, castling flags and side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub castling: CastlingRights,
    pub side_to_move: Color,
}

/// Deep copy of everything `apply` can touch. Only used for hypothetical
/// exploration; a committed move is never rolled back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    squares: [Option<Piece>; 64],
    castling: CastlingRights,
    side_to_move: Color,
}

/// Capture info returned by [`Board::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<PieceKind>,
    /// The pawn sits on the last rank waiting for [`Board::complete_promotion`].
    pub promotion_pending: bool,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling: CastlingRights::none(),
            side_to_move: Color::White,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board {
            squares: [None; 64],
            castling: CastlingRights::all(),
            side_to_move: Color::White,
        };

        for color in [Color::White, Color::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.set_piece(
                    Square::new(color.home_row(), col as u8),
                    Some(Piece::new(color, kind)),
                );
                b.set_piece(
                    Square::new(color.pawn_row(), col as u8),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Occupied squares of one color, in storage order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            squares: self.squares,
            castling: self.castling,
            side_to_move: self.side_to_move,
        }
    }

    pub fn restore(&mut self, snap: &Snapshot) {
        self.squares = snap.squares;
        self.castling = snap.castling;
        self.side_to_move = snap.side_to_move;
    }

    /// Builds a fully flagged move from a from/to pair. `promo` is only used
    /// when the piece is a pawn landing on its last rank; `None` leaves the
    /// promotion choice open. Returns `None` if `from` is empty.
    pub fn build_move(&self, from: Square, to: Square, promo: Option<PieceKind>) -> Option<Move> {
        let pc = self.piece_at(from)?;
        let flag = if pc.kind == PieceKind::King && from.col.abs_diff(to.col) == 2 {
            if to.col > from.col {
                MoveFlag::CastleKingside
            } else {
                MoveFlag::CastleQueenside
            }
        } else if pc.kind == PieceKind::Pawn && to.row == pc.color.last_row() {
            MoveFlag::Promotion(promo)
        } else if self.piece_at(to).is_some() {
            MoveFlag::Capture
        } else {
            MoveFlag::Quiet
        };
        Some(Move::with_flag(from, to, flag))
    }

    /// Plays `mv` on the board. Relocates the paired rook when castling,
    /// promotes when a kind is supplied, and clears castling flags for a
    /// moved king or rook. The turn passes to the other color unless the
    /// move leaves a promotion pending. Returns `None` if `from` is empty.
    pub fn apply(&mut self, mv: Move) -> Option<AppliedMove> {
        let moved = self.piece_at(mv.from)?;
        let captured = self.piece_at(mv.to);

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        if let Some(side) = mv.castle_side()
            && moved.kind == PieceKind::King
        {
            let row = moved.color.home_row();
            let rook_from = Square::new(row, side.rook_col());
            let rook_to = Square::new(row, side.rook_to_col());
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        let mut promotion_pending = false;
        if moved.kind == PieceKind::Pawn && mv.to.row == moved.color.last_row() {
            match mv.promotion() {
                Some(kind) if kind.is_promotion_choice() => {
                    self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
                }
                _ => promotion_pending = true,
            }
        }

        match moved.kind {
            PieceKind::King => self.castling.mark_king_moved(moved.color),
            PieceKind::Rook => self.revoke_rook_at(moved.color, mv.from),
            _ => {}
        }
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            self.revoke_rook_at(cp.color, mv.to);
        }

        if !promotion_pending {
            self.side_to_move = moved.color.other();
        }

        Some(AppliedMove {
            mv,
            moved,
            captured: captured.map(|pc| pc.kind),
            promotion_pending,
        })
    }

    /// Second phase of a human promotion: swaps the waiting pawn on `sq` for
    /// `kind` and hands the turn over. Returns false (no change) if there is
    /// no pawn waiting there or `kind` is not a promotion choice.
    pub fn complete_promotion(&mut self, sq: Square, kind: PieceKind) -> bool {
        if !kind.is_promotion_choice() {
            return false;
        }
        match self.piece_at(sq) {
            Some(pc) if pc.kind == PieceKind::Pawn && sq.row == pc.color.last_row() => {
                self.set_piece(sq, Some(Piece::new(pc.color, kind)));
                self.side_to_move = pc.color.other();
                true
            }
            _ => false,
        }
    }

    fn revoke_rook_at(&mut self, color: Color, sq: Square) {
        if sq.row != color.home_row() {
            return;
        }
        for side in CastleSide::BOTH {
            if sq.col == side.rook_col() {
                self.castling.mark_rook_moved(color, side);
            }
        }
    }

    /// Kinds of every non-king piece on the board, both colors.
    pub fn material_census(&self) -> Vec<PieceKind> {
        self.squares
            .iter()
            .flatten()
            .filter(|pc| pc.kind != PieceKind::King)
            .map(|pc| pc.kind)
            .collect()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
