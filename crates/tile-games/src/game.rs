use square_board::Direction;

/// One interactive puzzle session.
///
/// A front end drives this by feeding directions into `process_move`
/// and polling `get` per cell to draw the board.
pub trait Game {
    /// Reset the board to a fresh starting position.
    fn initialize(&mut self);

    /// Whether the player can still make a move.
    fn can_move(&self) -> bool;

    /// Whether the winning condition is met.
    fn has_won(&self) -> bool;

    /// Apply one directional move.
    fn process_move(&mut self, direction: Direction);

    /// Value shown at 1-based `(i, j)`, if any.
    fn get(&self, i: usize, j: usize) -> Option<u32>;
}
