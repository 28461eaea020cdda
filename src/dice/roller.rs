//! Dice creation.
//!
//! The roller is the only place that hands out `DiceId`s, so ids stay unique
//! across the round pools and the bonus pool of one game.

use crate::core::{DiceId, GameRng};
use crate::tiles::{Tile, TileKind};

use super::dice::{Dice, BONUS_TILES, DEMO_TILES, ROUND_DICE};

/// Creates dice with unique ids and rolls their faces.
///
/// ```
/// use route_dice::dice::DiceRoller;
///
/// let mut roller = DiceRoller::new(7);
/// let dice = roller.roll_round(1);
/// assert_eq!(dice.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DiceRoller {
    rng: GameRng,
    next_id: u32,
}

impl DiceRoller {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> DiceId {
        let id = DiceId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// A dice showing a chosen face.
    pub fn with_tile(&mut self, kind: TileKind) -> Dice {
        let id = self.alloc_id();
        Dice::new(id, Tile::new(kind))
    }

    /// Roll one of each round dice. Rolls depend only on the seed and the
    /// round number.
    pub fn roll_round(&mut self, round: u32) -> Vec<Dice> {
        let mut stream = self.rng.for_context(&format!("round-{}", round));
        let faces: Vec<TileKind> = ROUND_DICE
            .iter()
            .map(|faces| faces[stream.gen_range_usize(0..faces.len())])
            .collect();

        faces.into_iter().map(|kind| self.with_tile(kind)).collect()
    }

    /// The fixed demo sequence.
    pub fn demo(&mut self) -> Vec<Dice> {
        DEMO_TILES.iter().map(|&kind| self.with_tile(kind)).collect()
    }

    /// One dice per bonus crossing.
    pub fn bonus(&mut self) -> Vec<Dice> {
        BONUS_TILES.iter().map(|&kind| self.with_tile(kind)).collect()
    }
}
