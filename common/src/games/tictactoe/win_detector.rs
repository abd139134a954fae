use super::board::{Board, LINES};
use super::types::{Mark, Outcome, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in `LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(outcome) = check_win(board).and_then(Outcome::from_winner) {
        return outcome;
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
