//! Game engines built on the square-board core: 2048 and the fifteen
//! puzzle. Randomized initializers are injected capabilities, so the
//! engines stay deterministic under test and a front end only has to
//! poll `Game::get` per cell each frame.

pub mod fifteen;
pub mod game;
pub mod game2048;
pub mod parity;

pub use fifteen::{
    new_game_of_fifteen, FifteenInitializer, GameOfFifteen, RandomFifteenInitializer,
};
pub use game::Game;
pub use game2048::{new_game2048, Game2048, Game2048Initializer, RandomGame2048Initializer};
