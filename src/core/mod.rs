//! Core building blocks: identifiers, RNG, configuration, errors.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CellPos, DiceId, TileId};
pub use rng::GameRng;
pub use config::{GameConfig, GameType, RoundConfig, DEFAULT_DOUBLE_CLICK_MS};
pub use error::EngineError;
