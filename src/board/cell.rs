//! Board cells.

use serde::{Deserialize, Serialize};

use crate::core::CellPos;
use crate::tiles::{Edge, Tile};

/// One grid position.
///
/// Inner cells hold at most one tile. Border cells never hold a tile; some of
/// them carry an exit edge facing into the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pos: CellPos,
    border: bool,
    exit: Option<Edge>,
    tile: Option<Tile>,
    /// Round the current tile was placed in, 0 when empty.
    round: u32,
    locked: bool,
}

impl Cell {
    pub(crate) fn inner(pos: CellPos) -> Self {
        Self {
            pos,
            border: false,
            exit: None,
            tile: None,
            round: 0,
            locked: false,
        }
    }

    pub(crate) fn border(pos: CellPos, exit: Option<Edge>) -> Self {
        Self {
            pos,
            border: true,
            exit,
            tile: None,
            round: 0,
            locked: false,
        }
    }

    #[must_use]
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[must_use]
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_border(&self) -> bool {
        self.border
    }

    #[must_use]
    pub fn exit(&self) -> Option<Edge> {
        self.exit
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    pub(crate) fn set_tile(&mut self, tile: Option<Tile>, round: u32) {
        self.round = if tile.is_some() { round } else { 0 };
        self.tile = tile;
    }

    pub(crate) fn tile_mut(&mut self) -> Option<&mut Tile> {
        self.tile.as_mut()
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }
}
