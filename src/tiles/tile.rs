//! Tile instances.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

use super::edge::{Direction, Edge};
use super::kind::TileKind;
use super::transform::Transform;

/// A shape with an orientation.
///
/// `Clone` keeps the id and is meant for read-only copies. Use [`Tile::fork`]
/// to get an independent tile with its own identity, for example when a dice
/// face is placed on the board.
///
/// ```
/// use route_dice::tiles::{Tile, TileKind, Transform};
///
/// let face = Tile::new(TileKind::RailL);
/// let mut placed = face.fork();
/// placed.set_transform(Transform::new(2));
///
/// assert_ne!(face.id(), placed.id());
/// assert_eq!(face.transform(), Transform::IDENTITY);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    kind: TileKind,
    transform: Transform,
}

impl Tile {
    /// Create a tile in the identity orientation.
    #[must_use]
    pub fn new(kind: TileKind) -> Self {
        Self::with_transform(kind, Transform::IDENTITY)
    }

    #[must_use]
    pub fn with_transform(kind: TileKind, transform: Transform) -> Self {
        Self {
            id: TileId::next(),
            kind,
            transform,
        }
    }

    /// Deep copy with the same shape and orientation but a fresh id.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self::with_transform(self.kind, self.transform)
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Edges facing the board, clockwise from north.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        self.transform.apply(self.kind.base_edges())
    }

    /// The edge facing `dir` in the current orientation.
    #[must_use]
    pub fn edge(&self, dir: Direction) -> Edge {
        self.edges()[dir.index()]
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind, self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fork_is_independent() {
        let original = Tile::new(TileKind::RoadT);
        let mut copy = original.fork();

        assert_ne!(original.id(), copy.id());
        assert_eq!(original.kind(), copy.kind());
        assert_eq!(original.transform(), copy.transform());

        copy.set_transform(Transform::new(1));
        assert_eq!(original.transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_clone_keeps_identity() {
        let tile = Tile::new(TileKind::Bridge);
        assert_eq!(tile.clone().id(), tile.id());
    }

    #[test]
    fn test_edges_follow_transform() {
        let mut tile = Tile::new(TileKind::RailI);
        assert_eq!(tile.edge(Direction::North), Edge::Rail);
        assert_eq!(tile.edge(Direction::East), Edge::None);

        tile.set_transform(Transform::new(1));
        assert_eq!(tile.edge(Direction::North), Edge::None);
        assert_eq!(tile.edge(Direction::East), Edge::Rail);
    }

    #[test]
    fn test_display() {
        let tile = Tile::with_transform(TileKind::RailRoadL, Transform::new(5));
        assert_eq!(format!("{}", tile), "rail-road-l@5");
    }
}
