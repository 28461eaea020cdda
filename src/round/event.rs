//! Round history and summary.
//!
//! Every state change of a round is recorded as a `RoundRecord`. The
//! history lives in an `im::Vector`, so handing a snapshot to a front end
//! or a test is O(1).

use serde::{Deserialize, Serialize};

use crate::core::{CellPos, DiceId, TileId};
use crate::tiles::{TileKind, Transform};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Started { dice: Vec<DiceId> },
    Selected { dice: DiceId },
    Cancelled { dice: DiceId },
    Placed { dice: DiceId, tile: TileId, kind: TileKind, pos: CellPos, transform: Transform },
    Removed { dice: DiceId, tile: TileId, pos: CellPos },
    Cycled { tile: TileId, pos: CellPos, transform: Transform },
    EndEnabled { enabled: bool },
    Ended,
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    /// Position in the round's history, from 0.
    pub sequence: u32,
    pub event: RoundEvent,
}

impl RoundRecord {
    #[must_use]
    pub fn new(round: u32, sequence: u32, event: RoundEvent) -> Self {
        Self { round, sequence, event }
    }
}

/// One tile left on the board when a round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub dice: DiceId,
    pub tile: TileId,
    pub kind: TileKind,
    pub pos: CellPos,
    pub transform: Transform,
}

/// Delivered through the round's completion once the round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    /// Tiles that stayed on the board, ordered by position.
    pub placed: Vec<PlacedTile>,
    /// Bonus dice used this round, if any.
    pub bonus: Option<DiceId>,
}
