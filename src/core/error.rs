//! Engine errors.
//!
//! Illegal moves are never errors: the round rejects them silently and
//! reports `Outcome::Ignored`. `EngineError` covers the remaining cases,
//! where a collaborator is asked to do something it cannot do or the
//! surrounding flow breaks its side of the contract.

use thiserror::Error;

use super::ids::CellPos;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cell {pos} is outside the board")]
    OutOfBounds { pos: CellPos },

    #[error("cell {pos} is on the border and cannot hold a tile")]
    BorderCell { pos: CellPos },

    #[error("cell {pos} was committed in round {round} and cannot change")]
    CellLocked { pos: CellPos, round: u32 },

    #[error("no orientation of the tile fits at {pos}")]
    NoFit { pos: CellPos },

    #[error("round {round} has already been started")]
    RoundAlreadyStarted { round: u32 },

    #[error("round {round} has not been started")]
    RoundNotStarted { round: u32 },

    #[error("all {rounds} rounds have been played")]
    GameOver { rounds: u32 },

    #[error("click channel closed before round {round} ended")]
    InputClosed { round: u32 },

    #[error("round {round} was dropped before it ended")]
    CompletionDropped { round: u32 },
}
