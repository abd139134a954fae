use std::path::PathBuf;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, MoveError, TicTacToeGameState};
use common::log;
use common::records::{GameRecorder, save_records};

use crate::commands::{Command, HELP_TEXT};
use crate::config::ConfigHandle;
use crate::render::{render_board, render_history, render_stats, render_status};

pub struct SessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub perfect_play: bool,
    pub bot_move_delay: Duration,
    pub seed: Option<u64>,
    pub records_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Turn loop state of an offline game, free of any terminal IO.
pub struct LocalGame {
    state: TicTacToeGameState,
    rng: SessionRng,
    recorder: GameRecorder,
    records_path: Option<PathBuf>,
    config_manager: Option<ConfigHandle>,
}

impl LocalGame {
    pub fn new(settings: &SessionSettings, recorder: GameRecorder) -> Self {
        let rng = SessionRng::from_seed_or_random(settings.seed);
        log!("Session seed {}", rng.seed());

        Self {
            state: TicTacToeGameState::new(settings.mode, settings.difficulty)
                .with_perfect_play(settings.perfect_play),
            rng,
            recorder,
            records_path: settings.records_path.clone(),
            config_manager: None,
        }
    }

    pub fn with_config_manager(mut self, config_manager: ConfigHandle) -> Self {
        self.config_manager = Some(config_manager);
        self
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn recorder(&self) -> &GameRecorder {
        &self.recorder
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", render_board(&self.state.board), render_status(&self.state))
    }

    pub fn handle_command(&mut self, command: Command) -> Reply {
        let text = match command {
            Command::Place(index) => match self.place_human_mark(index) {
                Ok(text) => text,
                Err(e) => e.to_string(),
            },
            Command::NewGame => {
                self.state.reset();
                log!("New {} game, difficulty {}", self.state.mode, self.state.difficulty);
                self.render()
            }
            Command::SetDifficulty(difficulty) => {
                self.state.set_difficulty(difficulty);
                self.persist_difficulty(difficulty);
                format!("Difficulty set to {}", difficulty)
            }
            Command::Stats => render_stats(self.recorder.stats()),
            Command::History => render_history(&self.recorder.history().newest_first()),
            Command::ClearHistory => {
                self.recorder.clear_history();
                self.save_records();
                "History cleared".to_string()
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => return Reply::Quit,
            Command::Empty => self.render(),
            Command::Unknown(input) => format!("Unknown command '{}', type help", input),
        };
        Reply::Text(text)
    }

    fn place_human_mark(&mut self, index: usize) -> Result<String, MoveError> {
        if self.state.is_bot_turn() {
            return Err(MoveError::NotYourTurn { expected: self.state.current_mark });
        }
        self.state.place_mark(self.state.current_mark, index)?;
        Ok(self.after_move())
    }

    pub fn choose_bot_move(&mut self) -> Result<Option<usize>, MoveError> {
        self.state.choose_bot_move(&mut self.rng)
    }

    pub fn apply_bot_move(&mut self, index: usize) -> Result<String, MoveError> {
        let mark = self.state.current_mark;
        self.state.place_mark(mark, index)?;
        log!("Bot {} played cell {}", mark, index + 1);
        Ok(self.after_move())
    }

    fn after_move(&mut self) -> String {
        let mut text = self.render();
        if self.state.is_over() {
            self.finish_game();
            text.push('\n');
            text.push_str(&render_stats(self.recorder.stats()));
            text.push_str("\nType 'new' to play again");
        }
        text
    }

    fn finish_game(&mut self) {
        if let Some(record) = self.recorder.record_game(&self.state) {
            log!(
                "Game over: {} ({}, {}) final board {}",
                record.result, record.mode, record.difficulty, record.board
            );
        }
        self.save_records();
    }

    pub fn save_records(&self) {
        let Some(ref path) = self.records_path else {
            return;
        };
        if let Err(e) = save_records(path, &self.recorder.to_records()) {
            log!("Failed to save records to {}: {}", path.display(), e);
        }
    }

    fn persist_difficulty(&self, difficulty: Difficulty) {
        let Some(ref manager) = self.config_manager else {
            return;
        };
        let result = manager.get_config().and_then(|mut config| {
            config.game.difficulty = difficulty;
            manager.set_config(&config)
        });
        if let Err(e) = result {
            log!("Failed to save difficulty: {}", e);
        }
    }
}
