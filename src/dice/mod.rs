//! Dice: face tables, dice instances and the roller that creates them.

mod dice;
mod roller;

pub use dice::{Dice, BONUS_TILES, DEMO_TILES, DICE_1, DICE_2, DICE_3, DICE_4, ROUND_DICE};
pub use roller::DiceRoller;
