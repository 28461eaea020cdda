//! Dice selection surfaces.
//!
//! The round talks to both pools only through [`DiceSurface`]. Every call
//! takes a `DiceId`; a surface that does not hold the dice ignores the call,
//! which lets the round send the same update to both pools without knowing
//! which one the dice came from.

mod bonus;
mod pool;
mod slots;

pub use bonus::BonusPool;
pub use pool::Pool;

use crate::board::Board;
use crate::core::DiceId;
use crate::dice::Dice;

/// A surface the player picks dice from.
pub trait DiceSurface {
    /// Look up a dice held by this surface.
    fn get(&self, id: DiceId) -> Option<&Dice>;

    /// Is the dice held here and not yet used?
    fn is_enabled(&self, id: DiceId) -> bool;

    /// Would a click on this dice be delivered to the round?
    fn is_selectable(&self, id: DiceId) -> bool;

    /// Enabled dice that still have an available cell.
    fn remaining(&self) -> Vec<&Dice>;

    fn enable(&mut self, id: DiceId);

    fn disable(&mut self, id: DiceId);

    /// Highlight a dice as pending, or clear with `None`.
    fn pending(&mut self, id: Option<DiceId>);

    /// Currently highlighted dice, if this surface holds it.
    fn pending_dice(&self) -> Option<DiceId>;

    /// Recompute blocked dice against the current board.
    fn sync(&mut self, board: &Board);
}
