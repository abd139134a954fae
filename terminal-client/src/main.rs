mod commands;
mod config;
mod offline;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{Difficulty, GameMode};
use common::records::{GameRecorder, load_records};
use common::{log, logger};

use config::{get_config_manager, get_config_path};
use offline::{LocalGame, SessionSettings, run_tictactoe_game};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Singleplayer,
    Multiplayer,
    AiVsAi,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Singleplayer => GameMode::Singleplayer,
            ModeArg::Multiplayer => GameMode::Multiplayer,
            ModeArg::AiVsAi => GameMode::AiVsAi,
        }
    }
}

#[derive(Parser)]
#[command(name = "xo", version, about = "Play XO against the computer")]
struct Args {
    /// easy, medium or hard; unknown values fall back to hard
    #[arg(long)]
    difficulty: Option<String>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Replace the difficulty heuristic with full minimax
    #[arg(long)]
    perfect: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("XO".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.quiet);

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config_manager = get_config_manager(&config_path);
    let config = config_manager.get_config()?;
    log!("Using config {}", config_path.display());

    let records_path = config
        .records
        .save
        .then(|| config.records.resolve(&config_path));

    let recorder = match records_path.as_deref().map(load_records) {
        Some(Ok(records)) => GameRecorder::from_records(records),
        Some(Err(e)) => {
            log!("Failed to load records, starting fresh: {}", e);
            GameRecorder::new()
        }
        None => GameRecorder::new(),
    };

    let settings = SessionSettings {
        mode: args.mode.map(GameMode::from).unwrap_or(config.game.mode),
        difficulty: args
            .difficulty
            .as_deref()
            .map(Difficulty::from)
            .unwrap_or(config.game.difficulty),
        perfect_play: args.perfect || config.game.perfect_play,
        bot_move_delay: Duration::from_millis(args.delay_ms.unwrap_or(config.game.bot_move_delay_ms)),
        seed: args.seed,
        records_path,
    };

    let game = LocalGame::new(&settings, recorder).with_config_manager(config_manager);
    run_tictactoe_game(game, &settings).await
}
