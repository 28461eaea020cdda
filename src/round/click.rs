//! Click messages and their outcomes.
//!
//! Each surface reports clicks as `Click` values. A front end translates
//! its own input into these and hands them to the round, directly or through
//! a channel.

use serde::{Deserialize, Serialize};

use crate::core::{CellPos, DiceId};
use crate::tiles::Transform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Click {
    /// A dice in the round's pool.
    Pool(DiceId),
    /// A dice in the bonus pool.
    BonusPool(DiceId),
    /// A board cell.
    Board(CellPos),
    /// The end-of-round control.
    End,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The dice is now pending; `available` cells are highlighted.
    Selected { dice: DiceId, available: usize },
    /// The pending dice was clicked again and deselected.
    Cancelled { dice: DiceId },
    Placed { dice: DiceId, pos: CellPos, transform: Transform },
    Removed { dice: DiceId, pos: CellPos },
    Cycled { pos: CellPos, transform: Transform },
    Ended,
    /// Nothing changed.
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}
