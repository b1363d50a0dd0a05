use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BoardError;

/// A single position on a square board, identified by 1-based
/// (row, column) coordinates. Cells are value-like identities: created
/// once at grid construction, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset as `(dj, di)`: column delta first, row delta second.
    pub fn as_vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Fixed-size square coordinate space.
///
/// All `width * width` cells are created eagerly in row-major order and
/// the grid is immutable afterwards, so enumeration order is
/// deterministic for a given width.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize) -> Self {
        let mut cells = Vec::with_capacity(width * width);
        for i in 1..=width {
            for j in 1..=width {
                cells.push(Cell { i, j });
            }
        }
        Grid { width, cells }
    }

    /// Side length, fixed at construction.
    pub fn width(&self) -> usize {
        self.width
    }

    fn in_bounds(&self, i: usize, j: usize) -> bool {
        (1..=self.width).contains(&i) && (1..=self.width).contains(&j)
    }

    /// Bounds-checked lookup. Coordinates outside `[1, width]` are a
    /// caller contract violation.
    pub fn cell(&self, i: usize, j: usize) -> Result<Cell, BoardError> {
        self.cell_or_none(i, j).ok_or(BoardError::OutOfBounds {
            i,
            j,
            width: self.width,
        })
    }

    /// Non-failing lookup used by range iteration.
    pub fn cell_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        if self.in_bounds(i, j) {
            Some(self.cells[(i - 1) * self.width + (j - 1)])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `i` for each in-bounds `j` in `js`, in the order
    /// given. Out-of-bounds indices are silently skipped, so reversed
    /// and over-long ranges are both fine.
    pub fn row(&self, i: usize, js: impl IntoIterator<Item = usize>) -> Vec<Cell> {
        js.into_iter()
            .filter_map(|j| self.cell_or_none(i, j))
            .collect()
    }

    /// Cells of column `j` for each in-bounds `i` in `is`, in the order
    /// given.
    pub fn column(&self, is: impl IntoIterator<Item = usize>, j: usize) -> Vec<Cell> {
        is.into_iter()
            .filter_map(|i| self.cell_or_none(i, j))
            .collect()
    }
}

/// The cell one step from `cell` in `direction`, if still on the grid.
pub fn neighbor(grid: &Grid, cell: Cell, direction: Direction) -> Option<Cell> {
    let (dj, di) = direction.as_vector();
    let i = cell.i.checked_add_signed(di)?;
    let j = cell.j.checked_add_signed(dj)?;
    grid.cell_or_none(i, j)
}
