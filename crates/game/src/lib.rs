//! Game session layer between the rules engine and a host: enforces whose
//! turn it is, tracks the human's selection, runs the promotion handshake and
//! keeps the captured-material score.

pub mod config;
pub mod error;
pub mod session;

pub use config::{EngineKind, GameConfig};
pub use error::{GameError, GameResult};
pub use session::{GameSession, MoveReport, PendingPromotion, Phase, StatusReport};
