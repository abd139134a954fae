use common::games::tictactoe::{BOARD_SIZE, Board, Mark, TicTacToeGameState};
use common::records::{GameRecord, GameStats};

/// Empty cells show the number the player types to claim them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIZE + col + 1),
                    _ => format!(" {} ", mark),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    if let Some(line) = state.winning_line {
        let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
        return format!("{} wins along {}", line.mark, cells.join("-"));
    }
    if state.is_over() {
        return format!("Game over: {}", state.status);
    }
    if state.is_bot_turn() {
        format!("{} ({}) is thinking...", state.current_mark, state.difficulty)
    } else {
        format!("{} to move", state.current_mark)
    }
}

pub fn render_stats(stats: &GameStats) -> String {
    format!(
        "Games: {}  Wins: {}  Losses: {}  Draws: {}  Win rate: {:.1}%",
        stats.total_games,
        stats.wins,
        stats.losses,
        stats.draws,
        stats.win_rate()
    )
}

pub fn render_history(records: &[GameRecord]) -> String {
    if records.is_empty() {
        return "No games played yet".to_string();
    }
    records
        .iter()
        .map(|record| {
            format!(
                "{}  {:<11} {:<6} {:<12} {}",
                record.date,
                record.result.to_string(),
                record.difficulty.to_string(),
                record.mode.to_string(),
                record.board
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
