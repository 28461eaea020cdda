//! The playing board.
//!
//! The board is a 7x7 grid of inner cells surrounded by a ring of border
//! cells. Coordinates run `0..=8`; inner cells are `1..=7` on both axes.
//! Each side has three exits at inner positions 2, 4 and 6.
//!
//! ## Fit rule
//!
//! A tile fits a cell in a given orientation when none of its sides puts
//! rail against road, and at least one side connects to a neighbouring
//! tile or an exit with the same route type.
//!
//! ## Usage
//!
//! ```
//! use route_dice::board::Board;
//! use route_dice::tiles::{Tile, TileKind};
//!
//! let mut board = Board::new();
//! let tile = Tile::new(TileKind::RailI);
//!
//! // Only cells next to a matching exit are available on an empty board.
//! let available = board.available_cells(&tile);
//! assert!(!available.is_empty());
//!
//! let target = available[0];
//! board.place_best(tile, target.x, target.y, 1).unwrap();
//! assert!(board.cell(target.x, target.y).unwrap().tile().is_some());
//! ```

use smallvec::SmallVec;

use crate::core::{CellPos, EngineError};
use crate::tiles::{Contact, Direction, Edge, Tile, TileKind, Transform};

use super::cell::Cell;

/// Number of inner cells per side.
pub const BOARD_SIZE: i32 = 7;

const GRID: i32 = BOARD_SIZE + 2;

/// Exit positions along each side (inner coordinate).
const EXIT_SLOTS: [i32; 3] = [2, 4, 6];

/// Exits on the north and south sides, west to east.
const NORTH_SOUTH_EXITS: [Edge; 3] = [Edge::Road, Edge::Rail, Edge::Road];

/// Exits on the west and east sides, north to south.
const WEST_EAST_EXITS: [Edge; 3] = [Edge::Rail, Edge::Road, Edge::Rail];

#[derive(Clone, Debug)]
pub struct Board {
    /// Row-major, `GRID * GRID` cells.
    cells: Vec<Cell>,
    signaled: Vec<CellPos>,
    committed_round: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with its border exits.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity((GRID * GRID) as usize);

        for y in 0..GRID {
            for x in 0..GRID {
                let pos = CellPos::new(x, y);
                let cell = if Self::is_inner(pos) {
                    Cell::inner(pos)
                } else {
                    Cell::border(pos, Self::exit_at(pos))
                };
                cells.push(cell);
            }
        }

        Self {
            cells,
            signaled: Vec::new(),
            committed_round: 0,
        }
    }

    fn is_inner(pos: CellPos) -> bool {
        (1..=BOARD_SIZE).contains(&pos.x) && (1..=BOARD_SIZE).contains(&pos.y)
    }

    fn exit_at(pos: CellPos) -> Option<Edge> {
        let slot = |coord: i32| EXIT_SLOTS.iter().position(|&s| s == coord);
        let edge = GRID - 1;

        if pos.y == 0 || pos.y == edge {
            slot(pos.x).map(|i| NORTH_SOUTH_EXITS[i])
        } else if pos.x == 0 || pos.x == edge {
            slot(pos.y).map(|i| WEST_EAST_EXITS[i])
        } else {
            None
        }
    }

    fn index(pos: CellPos) -> Option<usize> {
        if (0..GRID).contains(&pos.x) && (0..GRID).contains(&pos.y) {
            Some((pos.y * GRID + pos.x) as usize)
        } else {
            None
        }
    }

    // === Cells ===

    /// Get a cell by coordinates.
    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell, EngineError> {
        let pos = CellPos::new(x, y);
        Self::index(pos)
            .map(|i| &self.cells[i])
            .ok_or(EngineError::OutOfBounds { pos })
    }

    fn cell_at(&self, pos: CellPos) -> Option<&Cell> {
        Self::index(pos).map(|i| &self.cells[i])
    }

    /// Get an inner cell for modification, rejecting border and locked cells.
    fn playable_cell_mut(&mut self, pos: CellPos) -> Result<&mut Cell, EngineError> {
        let index = Self::index(pos).ok_or(EngineError::OutOfBounds { pos })?;
        let cell = &mut self.cells[index];
        if cell.is_border() {
            return Err(EngineError::BorderCell { pos });
        }
        if cell.is_locked() {
            return Err(EngineError::CellLocked { pos, round: cell.round() });
        }
        Ok(cell)
    }

    /// Iterate over every cell, border included.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the inner cells.
    pub fn inner_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.is_border())
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.tile().is_some()).count()
    }

    /// Last round passed to `commit`, 0 before the first commit.
    #[must_use]
    pub fn committed_round(&self) -> u32 {
        self.committed_round
    }

    // === Fit queries ===

    /// The edge a neighbour presents towards `pos` from direction `dir`.
    fn facing_edge(&self, pos: CellPos, dir: Direction) -> Edge {
        match self.cell_at(dir.step(pos)) {
            Some(neighbour) if neighbour.is_border() => {
                // Exits only face the inner cell directly next to them.
                if Self::is_inner(pos) {
                    neighbour.exit().unwrap_or_default()
                } else {
                    Edge::None
                }
            }
            Some(neighbour) => neighbour
                .tile()
                .map_or(Edge::None, |t| t.edge(dir.opposite())),
            None => Edge::None,
        }
    }

    /// Connections made by `edges` at `pos`, or `None` on a rail/road clash.
    fn connections(&self, edges: [Edge; 4], pos: CellPos) -> Option<usize> {
        let mut connected = 0;
        for dir in Direction::ALL {
            match edges[dir.index()].meet(self.facing_edge(pos, dir)) {
                Contact::Conflict => return None,
                Contact::Connected => connected += 1,
                Contact::Open => {}
            }
        }
        Some(connected)
    }

    fn fits_edges(&self, edges: [Edge; 4], pos: CellPos) -> bool {
        matches!(self.connections(edges, pos), Some(n) if n > 0)
    }

    fn accepts_tiles(&self, pos: CellPos) -> bool {
        self.cell_at(pos)
            .is_some_and(|c| !c.is_border() && c.is_empty() && !c.is_locked())
    }

    /// Distinct transforms of `kind`, rotated so iteration starts at `current`.
    fn transforms_from(kind: TileKind, current: Transform) -> SmallVec<[Transform; 8]> {
        let mut transforms = kind.distinct_transforms();
        let edges = current.apply(kind.base_edges());
        let start = transforms
            .iter()
            .position(|t| t.apply(kind.base_edges()) == edges)
            .unwrap_or(0);
        transforms.rotate_left(start);
        transforms
    }

    /// Would `tile`, in its current orientation, fit at `(x, y)`?
    #[must_use]
    pub fn would_fit(&self, tile: &Tile, x: i32, y: i32) -> bool {
        let pos = CellPos::new(x, y);
        self.accepts_tiles(pos) && self.fits_edges(tile.edges(), pos)
    }

    /// Cells where some orientation of `tile` fits.
    #[must_use]
    pub fn available_cells(&self, tile: &Tile) -> Vec<CellPos> {
        let kind = tile.kind();
        let orientations: SmallVec<[[Edge; 4]; 8]> = kind
            .distinct_transforms()
            .iter()
            .map(|t| t.apply(kind.base_edges()))
            .collect();

        self.inner_cells()
            .filter(|c| c.is_empty() && !c.is_locked())
            .map(Cell::pos)
            .filter(|&pos| orientations.iter().any(|&edges| self.fits_edges(edges, pos)))
            .collect()
    }

    /// Orientation of `tile` with the most connections at `pos`.
    ///
    /// Ties go to the earliest transform in cycling order counted from the
    /// tile's current transform.
    fn best_transform(&self, tile: &Tile, pos: CellPos) -> Option<Transform> {
        let kind = tile.kind();
        let mut best: Option<(Transform, usize)> = None;

        for transform in Self::transforms_from(kind, tile.transform()) {
            let edges = transform.apply(kind.base_edges());
            if let Some(n) = self.connections(edges, pos).filter(|&n| n > 0) {
                if best.map_or(true, |(_, best_n)| n > best_n) {
                    best = Some((transform, n));
                }
            }
        }

        best.map(|(t, _)| t)
    }

    // === Placement ===

    /// Place `tile` at `(x, y)` in its best-fitting orientation.
    ///
    /// Returns a copy of the tile as placed. The caller is expected to have
    /// checked that the cell is available; an occupied cell is overwritten.
    pub fn place_best(&mut self, mut tile: Tile, x: i32, y: i32, round: u32) -> Result<Tile, EngineError> {
        let pos = CellPos::new(x, y);
        self.playable_cell_mut(pos)?;

        let transform = self
            .best_transform(&tile, pos)
            .ok_or(EngineError::NoFit { pos })?;
        tile.set_transform(transform);

        let placed = tile.clone();
        self.playable_cell_mut(pos)?.set_tile(Some(tile), round);
        Ok(placed)
    }

    /// Put `tile` at `(x, y)` as-is, or clear the cell with `None`.
    ///
    /// No fit check is made.
    pub fn place(&mut self, tile: Option<Tile>, x: i32, y: i32, round: u32) -> Result<(), EngineError> {
        let pos = CellPos::new(x, y);
        self.playable_cell_mut(pos)?.set_tile(tile, round);
        Ok(())
    }

    /// Advance the tile at `(x, y)` to the next distinct orientation that
    /// still fits in place.
    ///
    /// Returns the new transform, or `None` when the cell is empty or no
    /// other orientation fits.
    pub fn cycle_transform(&mut self, x: i32, y: i32) -> Result<Option<Transform>, EngineError> {
        let pos = CellPos::new(x, y);
        let tile = match self.playable_cell_mut(pos)?.tile() {
            Some(tile) => tile.clone(),
            None => return Ok(None),
        };

        let kind = tile.kind();
        let next = Self::transforms_from(kind, tile.transform())
            .into_iter()
            .skip(1)
            .find(|t| self.fits_edges(t.apply(kind.base_edges()), pos));

        if let Some(transform) = next {
            if let Some(tile) = self.playable_cell_mut(pos)?.tile_mut() {
                tile.set_transform(transform);
            }
        }
        Ok(next)
    }

    // === Signals ===

    /// Highlight `cells` as legal targets. An empty list clears the highlight.
    pub fn signal(&mut self, cells: Vec<CellPos>) {
        self.signaled = cells;
    }

    /// Highlight the cells available to `tile`, or clear with `None`.
    pub fn signal_available(&mut self, tile: Option<&Tile>) {
        let cells = tile.map(|t| self.available_cells(t)).unwrap_or_default();
        self.signal(cells);
    }

    /// Currently highlighted cells.
    #[must_use]
    pub fn signaled(&self) -> &[CellPos] {
        &self.signaled
    }

    // === Rounds ===

    /// Finalize every tile placed in `round`.
    pub fn commit(&mut self, round: u32) {
        for cell in self.cells.iter_mut() {
            if cell.tile().is_some() && cell.round() == round {
                cell.lock();
            }
        }
        self.committed_round = round;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_at(board: &Board, x: i32, y: i32) -> Tile {
        board.cell(x, y).unwrap().tile().cloned().unwrap()
    }

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(board.cells().count(), 81);
        assert_eq!(board.inner_cells().count(), 49);
        assert_eq!(board.tile_count(), 0);

        assert_eq!(board.cell(2, 0).unwrap().exit(), Some(Edge::Road));
        assert_eq!(board.cell(4, 0).unwrap().exit(), Some(Edge::Rail));
        assert_eq!(board.cell(0, 2).unwrap().exit(), Some(Edge::Rail));
        assert_eq!(board.cell(8, 4).unwrap().exit(), Some(Edge::Road));
        assert_eq!(board.cell(3, 0).unwrap().exit(), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.cell(9, 1).unwrap_err(),
            EngineError::OutOfBounds { pos: CellPos::new(9, 1) }
        );
    }

    #[test]
    fn test_available_cells_on_empty_board() {
        let board = Board::new();
        let rail = Tile::new(TileKind::RailI);
        let available = board.available_cells(&rail);

        // Rail exits: north/south at x=4, west/east at y=2 and y=6.
        assert_eq!(available.len(), 6);
        assert!(available.contains(&CellPos::new(4, 1)));
        assert!(available.contains(&CellPos::new(4, 7)));
        assert!(available.contains(&CellPos::new(1, 2)));
        assert!(available.contains(&CellPos::new(7, 6)));
        assert!(!available.contains(&CellPos::new(2, 1)));
    }

    #[test]
    fn test_would_fit_uses_current_orientation() {
        let board = Board::new();
        let mut rail = Tile::new(TileKind::RailI);

        // Vertical rail under the north rail exit.
        assert!(board.would_fit(&rail, 4, 1));
        // Vertical rail cannot reach the west exit at (0, 2).
        assert!(!board.would_fit(&rail, 1, 2));

        rail.set_transform(Transform::new(1));
        assert!(board.would_fit(&rail, 1, 2));
        assert!(!board.would_fit(&rail, 4, 1));
    }

    #[test]
    fn test_place_best_orients_tile() {
        let mut board = Board::new();
        let placed = board.place_best(Tile::new(TileKind::RailI), 1, 2, 1).unwrap();

        assert_eq!(placed.transform(), Transform::new(1));
        assert_eq!(tile_at(&board, 1, 2).edge(Direction::West), Edge::Rail);
        assert_eq!(board.cell(1, 2).unwrap().round(), 1);
    }

    #[test]
    fn test_place_best_rejects_border_and_misfit() {
        let mut board = Board::new();
        assert_eq!(
            board.place_best(Tile::new(TileKind::RailI), 0, 2, 1).unwrap_err(),
            EngineError::BorderCell { pos: CellPos::new(0, 2) }
        );
        assert_eq!(
            board.place_best(Tile::new(TileKind::RailI), 4, 4, 1).unwrap_err(),
            EngineError::NoFit { pos: CellPos::new(4, 4) }
        );
    }

    #[test]
    fn test_place_best_prefers_more_connections() {
        let mut board = Board::new();
        // Road exit north of (2, 1), road tile already east of it at (3, 1).
        board
            .place(Some(Tile::with_transform(TileKind::RoadI, Transform::new(1))), 3, 1, 1)
            .unwrap();

        let placed = board.place_best(Tile::new(TileKind::RoadL), 2, 1, 1).unwrap();
        let edges = placed.edges();
        assert_eq!(edges[Direction::North.index()], Edge::Road);
        assert_eq!(edges[Direction::East.index()], Edge::Road);
    }

    #[test]
    fn test_conflict_blocks_fit() {
        let mut board = Board::new();
        // Rail pointing west at (3, 1).
        board
            .place(Some(Tile::with_transform(TileKind::RailI, Transform::new(1))), 3, 1, 1)
            .unwrap();

        // A straight road at (2, 1) under the road exit is fine vertically...
        assert!(board.would_fit(&Tile::new(TileKind::RoadI), 2, 1));
        // ...but a road pointing east would meet the rail.
        let road_l = Tile::new(TileKind::RoadL);
        assert!(!board.would_fit(&road_l, 2, 1));
    }

    #[test]
    fn test_place_none_clears() {
        let mut board = Board::new();
        board.place_best(Tile::new(TileKind::RailI), 4, 1, 2).unwrap();
        board.place(None, 4, 1, 0).unwrap();

        let cell = board.cell(4, 1).unwrap();
        assert!(cell.is_empty());
        assert_eq!(cell.round(), 0);
    }

    #[test]
    fn test_cycle_transform_only_picks_fitting_orientations() {
        let mut board = Board::new();
        board.place_best(Tile::new(TileKind::RailT), 4, 1, 1).unwrap();
        let before = tile_at(&board, 4, 1).transform();

        let after = board.cycle_transform(4, 1).unwrap();
        assert!(after.is_some());
        assert_ne!(after, Some(before));
        // Whatever orientation was picked still connects to the rail exit.
        assert_eq!(tile_at(&board, 4, 1).edge(Direction::North), Edge::Rail);
    }

    #[test]
    fn test_cycle_transform_without_alternative() {
        let mut board = Board::new();
        board.place_best(Tile::new(TileKind::RailI), 4, 1, 1).unwrap();

        // The horizontal rail would not connect to anything.
        assert_eq!(board.cycle_transform(4, 1).unwrap(), None);
        assert_eq!(tile_at(&board, 4, 1).transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_cycle_empty_cell() {
        let mut board = Board::new();
        assert_eq!(board.cycle_transform(3, 3).unwrap(), None);
    }

    #[test]
    fn test_signal() {
        let mut board = Board::new();
        let tile = Tile::new(TileKind::RoadI);

        board.signal_available(Some(&tile));
        assert_eq!(board.signaled(), board.available_cells(&tile).as_slice());

        board.signal_available(None);
        assert!(board.signaled().is_empty());
    }

    #[test]
    fn test_commit_locks_round_tiles() {
        let mut board = Board::new();
        board.place_best(Tile::new(TileKind::RailI), 4, 1, 1).unwrap();
        board.commit(1);

        assert!(board.cell(4, 1).unwrap().is_locked());
        assert_eq!(board.committed_round(), 1);
        assert_eq!(
            board.place(None, 4, 1, 0).unwrap_err(),
            EngineError::CellLocked { pos: CellPos::new(4, 1), round: 1 }
        );
        assert!(board.cycle_transform(4, 1).is_err());
    }
}
