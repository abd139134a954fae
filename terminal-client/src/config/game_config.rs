use common::config::Validate;
use common::games::tictactoe::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};

pub const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default = "default_bot_move_delay_ms")]
    pub bot_move_delay_ms: u64,
    #[serde(default)]
    pub perfect_play: bool,
}

fn default_bot_move_delay_ms() -> u64 {
    500
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {} (got {})",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            mode: GameMode::Singleplayer,
            bot_move_delay_ms: default_bot_move_delay_ms(),
            perfect_play: false,
        }
    }
}
