//! Tile edges and compass directions.

use serde::{Deserialize, Serialize};

use crate::core::CellPos;

/// One of the four sides of a cell, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Clockwise index, north = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The neighbouring position in this direction.
    #[must_use]
    pub const fn step(self, pos: CellPos) -> CellPos {
        match self {
            Direction::North => CellPos::new(pos.x, pos.y - 1),
            Direction::East => CellPos::new(pos.x + 1, pos.y),
            Direction::South => CellPos::new(pos.x, pos.y + 1),
            Direction::West => CellPos::new(pos.x - 1, pos.y),
        }
    }
}

/// What a tile side (or a board exit) carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    #[default]
    None,
    Rail,
    Road,
}

impl Edge {
    /// How two touching sides relate.
    #[must_use]
    pub fn meet(self, other: Edge) -> Contact {
        match (self, other) {
            (Edge::None, _) | (_, Edge::None) => Contact::Open,
            (a, b) if a == b => Contact::Connected,
            _ => Contact::Conflict,
        }
    }
}

/// Result of two sides touching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// At least one side is empty.
    Open,
    /// Same route type on both sides.
    Connected,
    /// Rail meets road.
    Conflict,
}
