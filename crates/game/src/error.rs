use std::path::PathBuf;

use chess_core::{GameOutcome, PieceKind, Square};
use thiserror::Error;

/// Why a session rejected a request. A rejected request never changes the
/// game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("it is not your turn")]
    NotYourTurn,

    #[error("no piece is selected")]
    NoPieceSelected,

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the pawn on {square} is waiting for a promotion choice")]
    PromotionPending { square: Square },

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("the game is over ({0:?})")]
    GameOver(GameOutcome),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type GameResult<T> = Result<T, GameError>;
