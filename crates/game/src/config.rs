//! Game configuration, loaded from TOML.

use std::path::Path;

use chess_core::{Color, DEFAULT_DEPTH, Engine};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Which opponent the session plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Minimax,
    Random,
}

/// Game configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Plies searched by the minimax opponent
    pub search_depth: u8,
    pub engine: EngineKind,
    pub human_color: Color,
    /// Pause before the opponent replies, in milliseconds
    pub think_delay_ms: u64,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            engine: EngineKind::Minimax,
            human_color: Color::White,
            think_delay_ms: 200,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> GameResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the configured opponent, seeded when a seed is set.
    pub fn build_engine(&self) -> Box<dyn Engine> {
        match (self.engine, self.seed) {
            (EngineKind::Minimax, Some(seed)) => Box::new(MinimaxEngine::with_seed(seed)),
            (EngineKind::Minimax, None) => Box::new(MinimaxEngine::new()),
            (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (EngineKind::Random, None) => Box::new(RandomEngine::new()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
