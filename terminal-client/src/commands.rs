use common::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Board index, already converted from the 1-based cell number shown on screen.
    Place(usize),
    NewGame,
    SetDifficulty(Difficulty),
    Stats,
    History,
    ClearHistory,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    if let Ok(cell) = input.parse::<usize>() {
        return match cell {
            1..=CELL_COUNT => Command::Place(cell - 1),
            _ => Command::Unknown(input.to_string()),
        };
    }

    let mut parts = input.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next();

    match (keyword.as_str(), argument) {
        ("new" | "n" | "reset", None) => Command::NewGame,
        ("difficulty" | "d", Some(level)) => Command::SetDifficulty(Difficulty::from(level)),
        ("stats" | "s", None) => Command::Stats,
        ("history" | "h", None) => Command::History,
        ("clear-history", None) => Command::ClearHistory,
        ("help" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark on that cell
  new                 start a new game
  difficulty <level>  easy, medium or hard (anything else means hard)
  stats               show your statistics
  history             show recent games
  clear-history       forget recent games
  help                show this help
  quit                leave";
