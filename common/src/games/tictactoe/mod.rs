mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BoardError, LINES, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, BotStrategy, calculate_heuristic_move, calculate_move, calculate_perfect_move,
    select_move, select_move_for,
};
pub use game_state::{MoveError, TicTacToeGameState};
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameMode, Mark, Outcome, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
