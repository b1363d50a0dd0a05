use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use square_board::{neighbor, Cell, Direction, GameBoard};

use crate::game::Game;
use crate::parity::is_even;

const BOARD_WIDTH: usize = 4;

/// Supplies the starting layout for the fifteen puzzle.
pub trait FifteenInitializer {
    /// Even permutation of `1..=15`, placed on the first fifteen cells
    /// in row-major order. The last cell stays empty.
    fn initial_permutation(&mut self) -> Vec<u32>;
}

/// Shuffles until the permutation is even (hence solvable with the gap
/// in the bottom-right corner) and not already the solved layout.
pub struct RandomFifteenInitializer<R: Rng> {
    rng: R,
}

impl RandomFifteenInitializer<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFifteenInitializer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FifteenInitializer for RandomFifteenInitializer<R> {
    fn initial_permutation(&mut self) -> Vec<u32> {
        loop {
            let mut values: Vec<u32> = (1..=15).collect();
            values.shuffle(&mut self.rng);
            if is_even(&values) && !values.iter().copied().eq(1..=15) {
                return values;
            }
        }
    }
}

/// The fifteen puzzle over a 4x4 board.
///
/// The empty slot starts at the bottom-right corner and is tracked
/// across moves instead of being searched for.
pub struct GameOfFifteen<I> {
    board: GameBoard<u32>,
    initializer: I,
    empty_cell: Cell,
}

/// Start a fifteen puzzle with the default random initializer.
pub fn new_game_of_fifteen() -> GameOfFifteen<RandomFifteenInitializer<StdRng>> {
    GameOfFifteen::new(RandomFifteenInitializer::new())
}

fn corner(board: &GameBoard<u32>) -> Cell {
    board
        .grid()
        .cell(BOARD_WIDTH, BOARD_WIDTH)
        .expect("board corner is always in bounds")
}

impl<I: FifteenInitializer> GameOfFifteen<I> {
    pub fn new(initializer: I) -> Self {
        let board = GameBoard::new(BOARD_WIDTH);
        let empty_cell = corner(&board);
        Self {
            board,
            initializer,
            empty_cell,
        }
    }
}

impl<I: FifteenInitializer> Game for GameOfFifteen<I> {
    fn initialize(&mut self) {
        self.board = GameBoard::new(BOARD_WIDTH);
        let cells = self.board.grid().cells().to_vec();
        for (cell, value) in cells.into_iter().zip(self.initializer.initial_permutation()) {
            self.board.set(cell, Some(value));
        }
        self.empty_cell = corner(&self.board);
        self.board.set(self.empty_cell, None);
    }

    fn can_move(&self) -> bool {
        true
    }

    fn has_won(&self) -> bool {
        self.empty_cell.i == BOARD_WIDTH
            && self.empty_cell.j == BOARD_WIDTH
            && self.board.values().into_iter().copied().eq(1..=15)
    }

    fn process_move(&mut self, direction: Direction) {
        // The tile slides opposite to the pressed direction: pressing Up
        // moves the tile below the gap into it.
        let candidate = neighbor(self.board.grid(), self.empty_cell, direction.reversed());
        if let Some(cell) = candidate {
            if self.board.swap(self.empty_cell, cell) {
                debug!("slid tile from {} into {}", cell, self.empty_cell);
                self.empty_cell = cell;
            }
        }
    }

    fn get(&self, i: usize, j: usize) -> Option<u32> {
        let cell = self.board.grid().cell_or_none(i, j)?;
        self.board.get(cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always deals the same permutation.
    struct Fixed(Vec<u32>);

    impl FifteenInitializer for Fixed {
        fn initial_permutation(&mut self) -> Vec<u32> {
            self.0.clone()
        }
    }

    fn solved() -> GameOfFifteen<Fixed> {
        let mut game = GameOfFifteen::new(Fixed((1..=15).collect()));
        game.initialize();
        game
    }

    #[test]
    fn it_lays_out_the_permutation_with_a_trailing_gap() {
        let game = solved();
        assert_eq!(game.get(1, 1), Some(1));
        assert_eq!(game.get(3, 4), Some(12));
        assert_eq!(game.get(4, 3), Some(15));
        assert_eq!(game.get(4, 4), None);
        assert!(game.has_won());
        assert!(game.can_move());
    }

    #[test]
    fn it_slides_the_tile_opposite_the_pressed_direction() {
        let mut game = solved();

        // pressing Down pulls the tile above the gap, i.e. (3, 4), down
        game.process_move(Direction::Down);
        assert_eq!(game.get(4, 4), Some(12));
        assert_eq!(game.get(3, 4), None);
        assert!(!game.has_won());

        // and Up undoes it
        game.process_move(Direction::Up);
        assert_eq!(game.get(3, 4), Some(12));
        assert_eq!(game.get(4, 4), None);
        assert!(game.has_won());
    }

    #[test]
    fn it_ignores_moves_past_the_edge() {
        let mut game = solved();

        // gap is at (4, 4): pressing Up wants the tile at (5, 4), which
        // is off the board, as is (4, 5) for Left
        game.process_move(Direction::Up);
        game.process_move(Direction::Left);
        assert_eq!(game.get(4, 4), None);
        assert!(game.has_won());
    }

    #[test]
    fn it_tracks_the_gap_across_a_walk() {
        let mut game = solved();
        game.process_move(Direction::Down);
        game.process_move(Direction::Down); // gap now at (2, 4)
        assert_eq!(game.get(2, 4), None);
        assert_eq!(game.get(3, 4), Some(8));
        assert_eq!(game.get(4, 4), Some(12));

        game.process_move(Direction::Up);
        game.process_move(Direction::Up);
        assert!(game.has_won());
    }

    #[test]
    fn it_generates_solvable_random_permutations() {
        let mut initializer = RandomFifteenInitializer::seeded(7);
        for _ in 0..5 {
            let mut perm = initializer.initial_permutation();
            assert!(crate::parity::is_even(&perm));
            assert!(!perm.iter().copied().eq(1..=15));
            perm.sort_unstable();
            assert!(perm.iter().copied().eq(1..=15));
        }
    }
}
