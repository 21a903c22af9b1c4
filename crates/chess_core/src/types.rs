use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn step for this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row holding this color's back rank in storage order.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    /// Row on which this color's pawns promote.
    pub fn last_row(self) -> u8 {
        self.other().home_row()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in pawn units. The king is never captured and counts 0.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Kinds a pawn may turn into on the last rank.
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// Side of the board a rook starts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    pub fn idx(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }
    /// Column the king lands on.
    pub fn king_to_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }
    /// Column the rook lands on, adjacent to the king on the inner side.
    pub fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }
}

/// A board square. Row 0 is rank 8 (the far rank from white), column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Bounds-checked construction from signed coordinates.
    pub fn at(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::at(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(idx: usize) -> Square {
        Square::new((idx / 8) as u8, (idx % 8) as u8)
    }

    /// All 64 squares in storage order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveFlag {
    Quiet,
    Capture,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaching the last rank. `None` means the choice is still open.
    Promotion(Option<PieceKind>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            flag: MoveFlag::Quiet,
        }
    }

    pub fn with_flag(from: Square, to: Square, flag: MoveFlag) -> Self {
        Self { from, to, flag }
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        match self.flag {
            MoveFlag::CastleKingside => Some(CastleSide::Kingside),
            MoveFlag::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match self.flag {
            MoveFlag::Promotion(kind) => kind,
            _ => None,
        }
    }
}
