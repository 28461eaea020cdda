//! Game flows built on the round engine.
//!
//! `SingleGame` is the one-player flow: a fixed number of rounds over one
//! board, with the bonus pool shared across them.

mod single;

pub use single::{GameSummary, SingleGame};
