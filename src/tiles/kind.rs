//! Tile shapes.
//!
//! Every shape is described by its four base edges, clockwise from north.
//! Symmetric shapes have fewer than eight distinct orientations;
//! `distinct_transforms` lists one representative per orientation in
//! cycling order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::Edge;
use super::transform::Transform;

use Edge::{None as NO, Rail as RA, Road as RO};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    RailI,
    RoadI,
    RailL,
    RoadL,
    RailT,
    RoadT,
    /// Road passes over rail without connecting.
    Bridge,
    /// Straight station: rail on one side, road opposite.
    RailRoadI,
    /// Curved station: rail and road on adjacent sides.
    RailRoadL,
    CrossRoad,
    CrossRail,
    CrossRoadRoadRailRoad,
    CrossRoadRailRailRail,
    CrossRoadRailRailRoad,
    CrossRoadRailRoadRail,
}

impl TileKind {
    /// Shapes found on the route dice.
    pub const REGULAR: [TileKind; 9] = [
        TileKind::RailI,
        TileKind::RoadI,
        TileKind::RailL,
        TileKind::RoadL,
        TileKind::RailT,
        TileKind::RoadT,
        TileKind::Bridge,
        TileKind::RailRoadI,
        TileKind::RailRoadL,
    ];

    /// Special crossings available from the bonus pool.
    pub const BONUS: [TileKind; 6] = [
        TileKind::CrossRoadRoadRailRoad,
        TileKind::CrossRoadRailRailRail,
        TileKind::CrossRoad,
        TileKind::CrossRail,
        TileKind::CrossRoadRailRailRoad,
        TileKind::CrossRoadRailRoadRail,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::RailI => "rail-i",
            TileKind::RoadI => "road-i",
            TileKind::RailL => "rail-l",
            TileKind::RoadL => "road-l",
            TileKind::RailT => "rail-t",
            TileKind::RoadT => "road-t",
            TileKind::Bridge => "bridge",
            TileKind::RailRoadI => "rail-road-i",
            TileKind::RailRoadL => "rail-road-l",
            TileKind::CrossRoad => "cross-road",
            TileKind::CrossRail => "cross-rail",
            TileKind::CrossRoadRoadRailRoad => "cross-road-road-rail-road",
            TileKind::CrossRoadRailRailRail => "cross-road-rail-rail-rail",
            TileKind::CrossRoadRailRailRoad => "cross-road-rail-rail-road",
            TileKind::CrossRoadRailRoadRail => "cross-road-rail-road-rail",
        }
    }

    /// Look a shape up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::REGULAR
            .iter()
            .chain(Self::BONUS.iter())
            .copied()
            .find(|kind| kind.name() == name)
    }

    /// Edges in the identity orientation, clockwise from north.
    #[must_use]
    pub const fn base_edges(self) -> [Edge; 4] {
        match self {
            TileKind::RailI => [RA, NO, RA, NO],
            TileKind::RoadI => [RO, NO, RO, NO],
            TileKind::RailL => [RA, RA, NO, NO],
            TileKind::RoadL => [RO, RO, NO, NO],
            TileKind::RailT => [RA, RA, NO, RA],
            TileKind::RoadT => [RO, RO, NO, RO],
            TileKind::Bridge => [RO, RA, RO, RA],
            TileKind::RailRoadI => [RA, NO, RO, NO],
            TileKind::RailRoadL => [RA, RO, NO, NO],
            TileKind::CrossRoad => [RO, RO, RO, RO],
            TileKind::CrossRail => [RA, RA, RA, RA],
            TileKind::CrossRoadRoadRailRoad => [RO, RO, RA, RO],
            TileKind::CrossRoadRailRailRail => [RO, RA, RA, RA],
            TileKind::CrossRoadRailRailRoad => [RO, RA, RA, RO],
            TileKind::CrossRoadRailRoadRail => [RO, RA, RO, RA],
        }
    }

    #[must_use]
    pub fn is_bonus(self) -> bool {
        Self::BONUS.contains(&self)
    }

    /// One transform per visually distinct orientation, in cycling order.
    #[must_use]
    pub fn distinct_transforms(self) -> SmallVec<[Transform; 8]> {
        let base = self.base_edges();
        let mut seen: SmallVec<[[Edge; 4]; 8]> = SmallVec::new();
        let mut out = SmallVec::new();

        for transform in Transform::ALL {
            let edges = transform.apply(base);
            if !seen.contains(&edges) {
                seen.push(edges);
                out.push(transform);
            }
        }

        out
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in TileKind::REGULAR.iter().chain(TileKind::BONUS.iter()) {
            assert_eq!(TileKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(TileKind::from_name("monorail"), None);
    }

    #[test]
    fn test_distinct_transform_counts() {
        assert_eq!(TileKind::RailI.distinct_transforms().len(), 2);
        assert_eq!(TileKind::RoadL.distinct_transforms().len(), 4);
        assert_eq!(TileKind::RailT.distinct_transforms().len(), 4);
        assert_eq!(TileKind::Bridge.distinct_transforms().len(), 2);
        assert_eq!(TileKind::RailRoadI.distinct_transforms().len(), 4);
        assert_eq!(TileKind::RailRoadL.distinct_transforms().len(), 8);
        assert_eq!(TileKind::CrossRoad.distinct_transforms().len(), 1);
        assert_eq!(TileKind::CrossRoadRailRoadRail.distinct_transforms().len(), 2);
    }

    #[test]
    fn test_distinct_transforms_start_with_identity() {
        for kind in TileKind::REGULAR {
            assert_eq!(kind.distinct_transforms()[0], Transform::IDENTITY);
        }
    }

    #[test]
    fn test_bonus_flag() {
        assert!(TileKind::CrossRail.is_bonus());
        assert!(!TileKind::RailT.is_bonus());
    }
}
