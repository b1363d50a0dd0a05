use thiserror::Error;

/// Errors surfaced by the board core.
///
/// Every variant is a caller contract violation; none are retryable.
/// Handing a `GameBoard` a cell from a different grid is an internal bug
/// rather than a recoverable condition, so the store panics instead of
/// returning an error for it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("no cell with coordinates i={i}, j={j} on a board of width {width}")]
    OutOfBounds { i: usize, j: usize, width: usize },
}
