//! Dice and their face tables.

use serde::{Deserialize, Serialize};

use crate::core::DiceId;
use crate::tiles::{Tile, TileKind};

/// Faces of the three plain route dice.
pub const DICE_1: [TileKind; 6] = [
    TileKind::RoadI,
    TileKind::RailI,
    TileKind::RoadL,
    TileKind::RailL,
    TileKind::RoadT,
    TileKind::RailT,
];
pub const DICE_2: [TileKind; 6] = DICE_1;
pub const DICE_3: [TileKind; 6] = DICE_1;

/// Faces of the station dice.
pub const DICE_4: [TileKind; 6] = [
    TileKind::Bridge,
    TileKind::Bridge,
    TileKind::RailRoadI,
    TileKind::RailRoadI,
    TileKind::RailRoadL,
    TileKind::RailRoadL,
];

/// The dice rolled every round of a normal game, in draw order.
pub const ROUND_DICE: [[TileKind; 6]; 4] = [DICE_1, DICE_2, DICE_3, DICE_4];

/// Faces of the bonus pool, one dice per crossing.
pub const BONUS_TILES: [TileKind; 6] = TileKind::BONUS;

/// Fixed demo sequence covering every regular shape.
pub const DEMO_TILES: [TileKind; 9] = [
    TileKind::Bridge,
    TileKind::RailI,
    TileKind::RoadI,
    TileKind::RailRoadL,
    TileKind::RailRoadI,
    TileKind::RailT,
    TileKind::RoadL,
    TileKind::RailL,
    TileKind::RoadT,
];

/// A rolled dice showing one tile face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    id: DiceId,
    tile: Tile,
}

impl Dice {
    #[must_use]
    pub fn new(id: DiceId, tile: Tile) -> Self {
        Self { id, tile }
    }

    #[must_use]
    pub fn id(&self) -> DiceId {
        self.id
    }

    /// The face this dice shows.
    #[must_use]
    pub fn tile(&self) -> &Tile {
        &self.tile
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, self.tile)
    }
}
