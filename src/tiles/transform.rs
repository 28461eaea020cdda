//! Tile orientations.
//!
//! A `Transform` is one of the eight symmetries of a square: four clockwise
//! rotations, each optionally preceded by a mirror across the north-south
//! axis. Values `0..4` are plain rotations, `4..8` are mirrored rotations.
//! The numeric order is the fixed cycling sequence.

use serde::{Deserialize, Serialize};

use super::edge::{Direction, Edge};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform(u8);

impl Transform {
    pub const IDENTITY: Transform = Transform(0);

    /// All transforms in cycling order.
    pub const ALL: [Transform; 8] = [
        Transform(0),
        Transform(1),
        Transform(2),
        Transform(3),
        Transform(4),
        Transform(5),
        Transform(6),
        Transform(7),
    ];

    /// Create a transform. Panics outside `0..8`.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 8, "Transform index must be 0-7, got {}", index);
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Number of clockwise quarter turns.
    #[must_use]
    pub const fn rotation(self) -> usize {
        (self.0 % 4) as usize
    }

    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        self.0 >= 4
    }

    /// Apply to a tile's base edges (clockwise from north), giving the edges
    /// as they face the board.
    #[must_use]
    pub fn apply(self, base: [Edge; 4]) -> [Edge; 4] {
        let mut out = [Edge::None; 4];
        for dir in Direction::ALL {
            out[dir.index()] = base[self.source_side(dir)];
        }
        out
    }

    /// Which base side ends up facing `dir`.
    fn source_side(self, dir: Direction) -> usize {
        let unrotated = (dir.index() + 4 - self.rotation()) % 4;
        if self.is_mirrored() {
            (4 - unrotated) % 4
        } else {
            unrotated
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
