use std::fmt;

use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, BotStrategy, calculate_move};
use super::types::{CELL_COUNT, Difficulty, GameMode, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn { expected: Mark },
    NotBotTurn,
    OutOfBounds(usize),
    CellOccupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn { expected } => write!(f, "Not your turn, {} is to move", expected),
            MoveError::NotBotTurn => write!(f, "It is not the bot's turn"),
            MoveError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for MoveError {}

/// Authoritative state of one game as held by the host.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub perfect_play: bool,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::Undecided,
            mode,
            difficulty,
            perfect_play: false,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn with_perfect_play(mut self, perfect_play: bool) -> Self {
        self.perfect_play = perfect_play;
        self
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.mode.is_bot(self.current_mark)
    }

    pub fn strategy(&self) -> BotStrategy {
        if self.perfect_play {
            BotStrategy::Perfect
        } else {
            BotStrategy::Heuristic(self.difficulty)
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn { expected: self.current_mark });
        }

        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }

        if !self.board.is_empty_at(index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, mark);
        self.last_move = Some(index);

        self.check_game_over();

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(self.status)
    }

    /// Picks the bot's move without applying it, so the host can pace the reply.
    pub fn choose_bot_move(&self, rng: &mut SessionRng) -> Result<Option<usize>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.mode.is_bot(self.current_mark) {
            return Err(MoveError::NotBotTurn);
        }

        let input = BotInput::new(self.board, self.current_mark);
        Ok(calculate_move(self.strategy(), &input, rng))
    }

    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, MoveError> {
        let Some(index) = self.choose_bot_move(rng)? else {
            return Ok(None);
        };
        self.place_mark(self.current_mark, index)?;
        Ok(Some(index))
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.difficulty).with_perfect_play(self.perfect_play);
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }

    fn check_game_over(&mut self) {
        self.status = evaluate(&self.board);
        self.winning_line = check_win_with_line(&self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singleplayer(difficulty: Difficulty) -> TicTacToeGameState {
        TicTacToeGameState::new(GameMode::Singleplayer, difficulty)
    }

    #[test]
    fn test_new_game_is_in_progress() {
        let state = singleplayer(Difficulty::Easy);
        assert_eq!(state.status, Outcome::Undecided);
        assert_eq!(state.current_mark, Mark::X);
        assert!(!state.is_bot_turn());
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = singleplayer(Difficulty::Easy);
        assert_eq!(state.place_mark(Mark::X, 4), Ok(Outcome::Undecided));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
        assert!(state.is_bot_turn());
    }

    #[test]
    fn test_place_mark_errors() {
        let mut state = singleplayer(Difficulty::Easy);
        assert_eq!(state.place_mark(Mark::O, 0), Err(MoveError::NotYourTurn { expected: Mark::X }));
        assert_eq!(state.place_mark(Mark::X, 9), Err(MoveError::OutOfBounds(9)));
        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(state.place_mark(Mark::O, 0), Err(MoveError::CellOccupied(0)));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut state = TicTacToeGameState::new(GameMode::Multiplayer, Difficulty::Easy);
        for (mark, index) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4)] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.place_mark(Mark::X, 2), Ok(Outcome::XWon));
        assert_eq!(state.winning_line.map(|line| line.cells), Some([0, 1, 2]));
        assert_eq!(state.place_mark(Mark::O, 5), Err(MoveError::GameOver));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_draw_is_terminal() {
        let mut state = TicTacToeGameState::new(GameMode::Multiplayer, Difficulty::Easy);
        // X O X / X O O / O X X
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut mark = Mark::X;
        for index in moves {
            state.place_mark(mark, index).unwrap();
            mark = mark.opponent().unwrap();
        }
        assert_eq!(state.status, Outcome::Draw);
        assert!(state.winning_line.is_none());
    }

    #[test]
    fn test_bot_blocks_in_singleplayer() {
        let mut state = singleplayer(Difficulty::Hard);
        let mut rng = SessionRng::new(3);
        state.board = "X.....O..".parse().unwrap();
        state.place_mark(Mark::X, 1).unwrap();
        assert!(state.is_bot_turn());
        assert_eq!(state.play_bot_turn(&mut rng), Ok(Some(2)));
        assert_eq!(state.board.get(2), Some(Mark::O));
    }

    #[test]
    fn test_bot_turn_rejected_for_human() {
        let mut state = singleplayer(Difficulty::Hard);
        let mut rng = SessionRng::new(3);
        assert_eq!(state.play_bot_turn(&mut rng), Err(MoveError::NotBotTurn));
    }

    #[test]
    fn test_ai_vs_ai_plays_to_the_end() {
        let mut state = TicTacToeGameState::new(GameMode::AiVsAi, Difficulty::Medium);
        let mut rng = SessionRng::new(8);
        let mut turns = 0;
        while state.is_bot_turn() {
            state.play_bot_turn(&mut rng).unwrap();
            turns += 1;
        }
        assert!(state.is_over());
        assert!((5..=9).contains(&turns));
        assert_eq!(state.play_bot_turn(&mut rng), Err(MoveError::GameOver));
    }

    #[test]
    fn test_perfect_play_bot_never_loses_to_hard_human() {
        for seed in 0..30 {
            let mut rng = SessionRng::new(seed);
            let mut state = singleplayer(Difficulty::Hard).with_perfect_play(true);
            while !state.is_over() {
                if state.is_bot_turn() {
                    state.play_bot_turn(&mut rng).unwrap();
                } else {
                    let index = crate::games::tictactoe::select_move_for(
                        &state.board,
                        Difficulty::Hard,
                        Mark::X,
                        &mut rng,
                    )
                    .unwrap();
                    state.place_mark(Mark::X, index).unwrap();
                }
            }
            assert_ne!(state.status, Outcome::XWon);
        }
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut state = singleplayer(Difficulty::Medium).with_perfect_play(true);
        state.place_mark(Mark::X, 4).unwrap();
        state.set_difficulty(Difficulty::Hard);
        state.reset();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, Outcome::Undecided);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert!(state.perfect_play);
        assert_eq!(state.last_move, None);
    }
}
