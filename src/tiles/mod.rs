//! Tiles: shapes, orientations and edges.
//!
//! - [`Edge`] / [`Direction`]: what a side carries and which way it faces
//! - [`Transform`]: one of eight rotation/reflection orientations
//! - [`TileKind`]: the shape catalog, regular and bonus
//! - [`Tile`]: a shape instance with an id and an orientation

mod edge;
mod kind;
mod tile;
mod transform;

pub use edge::{Contact, Direction, Edge};
pub use kind::TileKind;
pub use tile::Tile;
pub use transform::Transform;
