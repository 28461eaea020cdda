//! Stable identifiers for tiles, dice and board positions.
//!
//! The round keeps a table from placed tiles to the dice that produced them.
//! Object identity is not available for that, so every tile and dice carries
//! an explicit id assigned when it is created.
//!
//! ## Allocation
//!
//! - `TileId`: process-wide counter, so a forked tile never collides with the
//!   tile it was forked from, whichever board or pool it came from.
//! - `DiceId`: allocated by the `DiceRoller` that creates the dice.
//!
//! ```
//! use route_dice::core::TileId;
//!
//! let a = TileId::next();
//! let b = TileId::next();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TILE_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a tile instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Allocate a fresh tile id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Unique identifier for a dice. Stable for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceId(pub u32);

impl DiceId {
    /// Create a new dice ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice({})", self.0)
    }
}

/// Board coordinates. `x` grows to the east, `y` to the south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_ids_are_unique() {
        let ids: Vec<_> = (0..100).map(|_| TileId::next()).collect();
        let mut sorted: Vec<_> = ids.iter().map(|id| id.raw()).collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 100);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId(7)), "Tile(7)");
        assert_eq!(format!("{}", DiceId::new(3)), "Dice(3)");
        assert_eq!(format!("{}", CellPos::new(2, 5)), "(2, 5)");
    }

    #[test]
    fn test_dice_id_from() {
        let id: DiceId = 12.into();
        assert_eq!(id.raw(), 12);
    }

    #[test]
    fn test_serialization() {
        let pos = CellPos::new(4, 1);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: CellPos = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
