use super::grid::{Cell, Grid};

/// A square grid paired with one optional value per cell.
///
/// Values live in a flat `Vec` indexed by `(i - 1) * width + (j - 1)`,
/// so no hashing is involved. The domain is fixed to the grid's cell set
/// for the board's whole lifetime; only the values change.
#[derive(Debug, Clone)]
pub struct GameBoard<T> {
    grid: Grid,
    values: Vec<Option<T>>,
}

impl<T> GameBoard<T> {
    /// Board over a fresh `width`-wide grid, every cell empty.
    pub fn new(width: usize) -> Self {
        Self::from_grid(Grid::new(width))
    }

    /// Board over an existing grid, every cell empty.
    pub fn from_grid(grid: Grid) -> Self {
        let values = (0..grid.cells().len()).map(|_| None).collect();
        GameBoard { grid, values }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    // A cell from another grid can only reach us through caller confusion
    // between boards, which is an internal bug: fail loudly.
    fn offset(&self, cell: Cell) -> usize {
        let width = self.grid.width();
        assert!(
            (1..=width).contains(&cell.i) && (1..=width).contains(&cell.j),
            "cell {cell} does not belong to this board (width {width})"
        );
        (cell.i - 1) * width + (cell.j - 1)
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.values[self.offset(cell)].as_ref()
    }

    /// Overwrite the value at `cell`; `None` clears it.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        let idx = self.offset(cell);
        self.values[idx] = value;
    }

    /// Cells whose current value satisfies `predicate`, in row-major order.
    pub fn filter(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Vec<Cell> {
        self.grid
            .cells()
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| predicate(value.as_ref()))
            .map(|(&cell, _)| cell)
            .collect()
    }

    /// First cell (row-major) whose value satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Option<Cell> {
        self.grid
            .cells()
            .iter()
            .zip(&self.values)
            .find(|(_, value)| predicate(value.as_ref()))
            .map(|(&cell, _)| cell)
    }

    pub fn any(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values.iter().any(|value| predicate(value.as_ref()))
    }

    pub fn all(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values.iter().all(|value| predicate(value.as_ref()))
    }

    /// All present values in row-major enumeration order.
    pub fn values(&self) -> Vec<&T> {
        self.values.iter().filter_map(|value| value.as_ref()).collect()
    }

    /// Swap the two cells' values iff exactly one of them is empty.
    /// Returns whether the swap happened.
    pub fn swap(&mut self, a: Cell, b: Cell) -> bool {
        let (ia, ib) = (self.offset(a), self.offset(b));
        if self.values[ia].is_some() != self.values[ib].is_some() {
            self.values.swap(ia, ib);
            true
        } else {
            false
        }
    }
}
