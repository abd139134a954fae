mod local_game;
mod tictactoe_runner;

pub use local_game::{LocalGame, Reply, SessionSettings};
pub use tictactoe_runner::run_tictactoe_game;
