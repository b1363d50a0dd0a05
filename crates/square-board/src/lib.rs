//! Shared mechanics for small square-grid tile puzzles.
//!
//! The crate provides a fixed-size grid of cell identities, a per-cell
//! optional-value store, and the slide/merge transform both 2048-style
//! games and the fifteen puzzle build their moves on. Everything is
//! synchronous and single-owner: one `GameBoard` per game session.

pub mod board;
pub mod error;

pub use board::{move_and_merge, move_values, neighbor, Cell, Direction, GameBoard, Grid};
pub use error::BoardError;
