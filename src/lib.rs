//! # route-dice
//!
//! Round turn engine for a roll-and-write route-building game. Each round
//! hands out dice showing rail and road tiles; the player draws them onto a
//! 7x7 grid ringed by fixed exits, then ends the round once no usable dice
//! remain.
//!
//! ## Design Principles
//!
//! 1. **Messages, not callbacks**: the pool, the bonus pool and the board
//!    report clicks as [`Click`] values. A round consumes them one at a time,
//!    directly or from a channel.
//!
//! 2. **Exclusive borrows**: a [`Round`] borrows the board and the bonus pool
//!    mutably, so exactly one round routes clicks to them at a time.
//!
//! 3. **Identity by id**: tiles and dice carry [`TileId`] / [`DiceId`]; the
//!    round maps placed tiles back to their dice through those ids.
//!
//! ## Modules
//!
//! - `core`: ids, RNG, configuration, errors
//! - `tiles`: tile shapes, edges and the eight orientations
//! - `dice`: dice faces and the seeded roller
//! - `board`: grid, fit rules, placement and commit
//! - `pools`: the round pool and the bonus pool
//! - `round`: the turn engine, its history and its completion signal
//! - `games`: multi-round game flow

pub mod core;
pub mod tiles;
pub mod dice;
pub mod board;
pub mod pools;
pub mod round;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CellPos, DiceId, TileId,
    GameRng,
    GameConfig, GameType, RoundConfig,
    EngineError,
};

pub use crate::tiles::{Contact, Direction, Edge, Tile, TileKind, Transform};

pub use crate::dice::{Dice, DiceRoller};

pub use crate::board::{Board, Cell, BOARD_SIZE};

pub use crate::pools::{BonusPool, DiceSurface, Pool};

pub use crate::round::{
    Click, Outcome,
    Round, RoundState, RoundCompletion,
    RoundEvent, RoundRecord, RoundSummary, PlacedTile,
};

pub use crate::games::{GameSummary, SingleGame};
