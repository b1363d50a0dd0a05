use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use square_board::{move_values, Cell, Direction, GameBoard};

use crate::game::Game;

pub const WINNING_TILE: u32 = 2048;
const BOARD_WIDTH: usize = 4;

/// Supplies where and what to place after a successful move.
pub trait Game2048Initializer<T> {
    /// Next value to add, or `None` when nothing can be placed.
    fn next_value(&mut self, board: &GameBoard<T>) -> Option<(Cell, T)>;
}

/// Uniform random empty cell; a 2 nine times out of ten, otherwise a 4.
pub struct RandomGame2048Initializer<R: Rng> {
    rng: R,
}

impl RandomGame2048Initializer<StdRng> {
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

impl Default for RandomGame2048Initializer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game2048Initializer<u32> for RandomGame2048Initializer<R> {
    fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)> {
        let empty = board.filter(|value| value.is_none());
        if empty.is_empty() {
            return None;
        }
        let cell = empty[self.rng.gen_range(0..empty.len())];
        let value = if self.rng.gen_range(0..10) < 9 { 2 } else { 4 };
        Some((cell, value))
    }
}

/// The 2048 game over a 4x4 board.
pub struct Game2048<I> {
    board: GameBoard<u32>,
    initializer: I,
}

/// Start a 2048 game with the default random initializer.
pub fn new_game2048() -> Game2048<RandomGame2048Initializer<StdRng>> {
    Game2048::new(RandomGame2048Initializer::new())
}

impl<I: Game2048Initializer<u32>> Game2048<I> {
    pub fn new(initializer: I) -> Self {
        Self {
            board: GameBoard::new(BOARD_WIDTH),
            initializer,
        }
    }

    fn add_new_value(&mut self) {
        if let Some((cell, value)) = self.initializer.next_value(&self.board) {
            debug!("spawning {} at {}", value, cell);
            self.board.set(cell, Some(value));
        }
    }
}

impl<I: Game2048Initializer<u32>> Game for Game2048<I> {
    fn initialize(&mut self) {
        self.board = GameBoard::new(BOARD_WIDTH);
        for _ in 0..2 {
            self.add_new_value();
        }
    }

    fn can_move(&self) -> bool {
        self.board.any(|value| value.is_none())
    }

    fn has_won(&self) -> bool {
        self.board.any(|value| value == Some(&WINNING_TILE))
    }

    fn process_move(&mut self, direction: Direction) {
        // A new tile only appears when the move actually changed something.
        if move_values(&mut self.board, direction, |value| value * 2) {
            self.add_new_value();
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
    use std::collections::VecDeque;

    /// Places a fixed script of (i, j, value) triples, then runs dry.
    struct Scripted {
        placements: VecDeque<(usize, usize, u32)>,
    }

    impl Scripted {
        fn new(placements: &[(usize, usize, u32)]) -> Self {
            Self {
                placements: placements.iter().copied().collect(),
            }
        }
    }

    impl Game2048Initializer<u32> for Scripted {
        fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)> {
            let (i, j, value) = self.placements.pop_front()?;
            let cell = board.grid().cell_or_none(i, j)?;
            Some((cell, value))
        }
    }

    fn row(game: &impl Game, i: usize) -> Vec<Option<u32>> {
        (1..=4).map(|j| game.get(i, j)).collect()
    }

    #[test]
    fn it_spawns_two_values_on_initialize() {
        let mut game = Game2048::new(Scripted::new(&[(1, 1, 2), (1, 2, 2)]));
        game.initialize();
        assert_eq!(row(&game, 1), vec![Some(2), Some(2), None, None]);
        assert!(game.can_move());
        assert!(!game.has_won());
    }

    #[test]
    fn it_merges_left_and_spawns_on_change() {
        let mut game = Game2048::new(Scripted::new(&[
            (1, 1, 2),
            (1, 2, 2),
            (1, 3, 4),
            (4, 4, 2),
        ]));
        game.initialize();
        game.process_move(Direction::Left); // [2,2,_,_] -> [4,_,_,_], spawns 4 at (1,3)
        game.process_move(Direction::Left); // [4,_,4,_] -> [8,_,_,_], spawns 2 at (4,4)

        assert_eq!(row(&game, 1), vec![Some(8), None, None, None]);
        assert_eq!(game.get(4, 4), Some(2));
    }

    #[test]
    fn it_does_not_spawn_after_a_no_op_move() {
        let mut game = Game2048::new(Scripted::new(&[(1, 1, 2), (2, 1, 4), (3, 3, 8)]));
        game.initialize();

        // both tiles already sit against the left edge in distinct rows
        game.process_move(Direction::Left);
        assert_eq!(game.get(3, 3), None);
        assert_eq!(game.get(1, 1), Some(2));
        assert_eq!(game.get(2, 1), Some(4));
    }

    #[test]
    fn it_detects_a_win() {
        let mut game = Game2048::new(Scripted::new(&[(2, 1, 1024), (2, 2, 1024)]));
        game.initialize();
        assert!(!game.has_won());
        game.process_move(Direction::Left);
        assert_eq!(game.get(2, 1), Some(2048));
        assert!(game.has_won());
    }

    #[test]
    fn it_reports_can_move_while_any_cell_is_empty() {
        let mut game = Game2048::new(Scripted::new(&[(1, 1, 2)]));
        game.initialize();
        assert!(game.can_move());
    }

    #[test]
    fn it_initializes_with_seeded_randomness() {
        let mut game = Game2048::new(RandomGame2048Initializer::seeded(42));
        game.initialize();

        let placed: Vec<u32> = (1..=4)
            .flat_map(|i| (1..=4).map(move |j| (i, j)))
            .filter_map(|(i, j)| game.get(i, j))
            .collect();
        assert_eq!(placed.len(), 2);
        assert!(placed.iter().all(|v| *v == 2 || *v == 4));
    }
}
