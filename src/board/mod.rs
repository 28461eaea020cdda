//! Board: the cell grid, fit queries, placement and round commit.

mod board;
mod cell;

pub use board::{Board, BOARD_SIZE};
pub use cell::Cell;
