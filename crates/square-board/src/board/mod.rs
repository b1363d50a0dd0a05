//! Board module: square grid of cells, per-cell optional values, and the
//! slide/merge ops both game engines build on.
//!
//! - `Grid` resolves 1-based `(i, j)` coordinates to `Cell` identities.
//! - `GameBoard<T>` pairs a grid with one optional value per cell.
//! - `ops` holds the merge transform and the directional move orchestrator.

mod grid;
mod ops;
mod store;

pub use grid::{neighbor, Cell, Direction, Grid};
pub use ops::{move_and_merge, move_values};
pub use store::GameBoard;
