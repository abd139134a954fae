use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStrategy {
    Heuristic(Difficulty),
    Perfect,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

pub fn calculate_move(strategy: BotStrategy, input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    match strategy {
        BotStrategy::Heuristic(difficulty) => {
            select_move_for(&input.board, difficulty, input.bot_mark, rng)
        }
        BotStrategy::Perfect => calculate_perfect_move(&input.board, input.bot_mark),
    }
}

/// Move for the automated `O` player.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    select_move_for(board, difficulty, Mark::O, rng)
}

pub fn select_move_for(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    bot_mark.opponent()?;

    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_heuristic_move(board, bot_mark, rng)
            } else {
                calculate_random_move(board, rng)
            }
        }
        Difficulty::Hard => calculate_heuristic_move(board, bot_mark, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// One ply deep: take a win, else block the opponent's win, else play randomly.
/// Forks and other two-move threats are not seen.
pub fn calculate_heuristic_move(board: &Board, bot_mark: Mark, rng: &mut SessionRng) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark, &available_moves) {
        return Some(index);
    }

    calculate_random_move(board, rng)
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    let target = Outcome::from_winner(mark)?;
    moves
        .iter()
        .copied()
        .find(|&index| evaluate(&board.with_mark(index, mark)) == target)
}

/// Full-depth minimax, never loses. Equal scores keep the lowest index.
pub fn calculate_perfect_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.set(index, bot_mark);

        let score = minimax(
            &mut board,
            1,
            false,
            bot_mark,
            opponent_mark,
            i32::MIN,
            i32::MAX,
        );

        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        Outcome::Draw => return 0,
        Outcome::Undecided => {}
        outcome => {
            return if outcome.winner() == Some(bot_mark) {
                WIN_SCORE - depth
            } else {
                -WIN_SCORE + depth
            };
        }
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Fills the board with random legal play, stopping at the first terminal position.
    fn random_position(rng: &mut SessionRng, plies: usize) -> Board {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for _ in 0..plies {
            if evaluate(&board).is_terminal() {
                break;
            }
            let moves = get_available_moves(&board);
            let index = moves[rng.random_range(0..moves.len())];
            let next = board.with_mark(index, mark);
            if evaluate(&next).is_terminal() {
                break;
            }
            board = next;
            mark = mark.opponent().unwrap();
        }
        board
    }

    #[test]
    fn test_hard_takes_win_over_block() {
        let mut rng = SessionRng::new(1);
        assert_eq!(select_move(&board("OO.XX...."), Difficulty::Hard, &mut rng), Some(2));
    }

    #[test]
    fn test_hard_takes_later_win_over_earlier_block() {
        let mut rng = SessionRng::new(1);
        assert_eq!(select_move(&board("XX.OO...."), Difficulty::Hard, &mut rng), Some(5));
    }

    #[test]
    fn test_hard_blocks() {
        let mut rng = SessionRng::new(1);
        assert_eq!(select_move(&board("XX.O....."), Difficulty::Hard, &mut rng), Some(2));
        assert_eq!(select_move(&board("X..X....O"), Difficulty::Hard, &mut rng), Some(6));
    }

    #[test]
    fn test_hard_blocks_first_threat_in_index_order() {
        let mut rng = SessionRng::new(3);
        // X threatens both 2 (top row) and 6 (left column).
        assert_eq!(select_move(&board("XX.X...O."), Difficulty::Hard, &mut rng), Some(2));
    }

    #[test]
    fn test_hard_after_center_opening_returns_other_cell() {
        let board = Board::new().with_mark(4, Mark::X);
        assert_eq!(evaluate(&board), Outcome::Undecided);
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let index = select_move(&board, Difficulty::Hard, &mut rng).unwrap();
            assert!([0, 1, 2, 3, 5, 6, 7, 8].contains(&index));
        }
    }

    #[test]
    fn test_hard_is_blind_to_forks() {
        // O must answer on an edge here; a corner lets X fork.
        let board = board("X...O...X");
        let corner_seen = (0..50).any(|seed| {
            let mut rng = SessionRng::new(seed);
            matches!(select_move(&board, Difficulty::Hard, &mut rng), Some(2 | 6))
        });
        assert!(corner_seen);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut rng = SessionRng::new(5);
        let full = board("XOXXOOOXX");
        for difficulty in Difficulty::ALL {
            assert_eq!(select_move(&full, difficulty, &mut rng), None);
        }
        assert_eq!(calculate_perfect_move(&full, Mark::O), None);
    }

    #[test]
    fn test_empty_bot_mark_returns_none() {
        let mut rng = SessionRng::new(5);
        assert_eq!(select_move_for(&Board::new(), Difficulty::Easy, Mark::Empty, &mut rng), None);
        assert_eq!(calculate_perfect_move(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_selected_move_is_always_empty() {
        let mut rng = SessionRng::new(2024);
        for _ in 0..500 {
            let plies = rng.random_range(0..8usize);
            let board = random_position(&mut rng, plies);
            for difficulty in Difficulty::ALL {
                let index = select_move(&board, difficulty, &mut rng).unwrap();
                assert!(board.is_empty_at(index), "{} -> {}", board, index);
            }
        }
    }

    #[test]
    fn test_bot_move_never_completes_line_for_human() {
        let mut rng = SessionRng::new(77);
        for _ in 0..500 {
            let plies = rng.random_range(0..8usize);
            let board = random_position(&mut rng, plies);
            for difficulty in Difficulty::ALL {
                let index = select_move(&board, difficulty, &mut rng).unwrap();
                assert_ne!(evaluate(&board.with_mark(index, Mark::O)), Outcome::XWon);
            }
        }
    }

    #[test]
    fn test_easy_is_roughly_uniform() {
        let board = board("X...O....");
        let available = get_available_moves(&board);
        let mut counts = [0usize; 9];
        let mut rng = SessionRng::new(42);
        let trials = 7000;

        for _ in 0..trials {
            let index = select_move(&board, Difficulty::Easy, &mut rng).unwrap();
            counts[index] += 1;
        }

        let expected = trials / available.len();
        for index in available {
            let count = counts[index];
            assert!(
                count > expected * 8 / 10 && count < expected * 12 / 10,
                "cell {} picked {} times, expected about {}",
                index,
                count,
                expected
            );
        }
        assert_eq!(counts[0], 0);
        assert_eq!(counts[4], 0);
    }

    #[test]
    fn test_medium_mixes_heuristic_and_random() {
        let board = board("OO.XX....");
        let mut rng = SessionRng::new(9);
        let trials = 2000;
        let wins = (0..trials)
            .filter(|_| select_move(&board, Difficulty::Medium, &mut rng) == Some(2))
            .count();

        // 0.5 from the heuristic branch plus 0.5 * 1/5 from the random branch.
        let rate = wins as f64 / trials as f64;
        assert!(rate > 0.5 && rate < 0.7, "win-take rate {}", rate);
    }

    #[test]
    fn test_same_seed_same_move() {
        let board = board("X........");
        for difficulty in Difficulty::ALL {
            let a = select_move(&board, difficulty, &mut SessionRng::new(11));
            let b = select_move(&board, difficulty, &mut SessionRng::new(11));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_hard_never_misses_immediate_win_or_block() {
        let mut rng = SessionRng::new(31337);
        for _ in 0..200 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while evaluate(&board) == Outcome::Undecided {
                let moves = get_available_moves(&board);
                let opponent = mark.opponent().unwrap();
                let expected = find_winning_move(&board, mark, &moves)
                    .or_else(|| find_winning_move(&board, opponent, &moves));

                let index = select_move_for(&board, Difficulty::Hard, mark, &mut rng).unwrap();
                if let Some(expected) = expected {
                    assert_eq!(index, expected, "board {} mover {}", board, mark);
                }

                board = board.with_mark(index, mark);
                mark = opponent;
            }
        }
    }

    #[test]
    fn test_perfect_takes_win_and_blocks() {
        assert_eq!(calculate_perfect_move(&board("OO.XX...."), Mark::O), Some(2));
        assert_eq!(calculate_perfect_move(&board("XX.O....."), Mark::O), Some(2));
    }

    #[test]
    fn test_perfect_avoids_fork_trap() {
        let index = calculate_perfect_move(&board("X...O...X"), Mark::O).unwrap();
        assert!([1, 3, 5, 7].contains(&index));
    }

    #[test]
    fn test_perfect_never_loses_against_hard() {
        for seed in 0..100 {
            let mut rng = SessionRng::new(seed);
            let mut board = Board::new();
            let mut mark = Mark::X;
            while evaluate(&board) == Outcome::Undecided {
                let index = if mark == Mark::X {
                    select_move_for(&board, Difficulty::Hard, Mark::X, &mut rng)
                } else {
                    calculate_perfect_move(&board, Mark::O)
                }
                .unwrap();
                board = board.with_mark(index, mark);
                mark = mark.opponent().unwrap();
            }
            assert_ne!(evaluate(&board), Outcome::XWon, "seed {} ended {}", seed, board);
        }
    }

    #[test]
    fn test_perfect_self_play_draws() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while evaluate(&board) == Outcome::Undecided {
            let index = calculate_perfect_move(&board, mark).unwrap();
            board = board.with_mark(index, mark);
            mark = mark.opponent().unwrap();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_calculate_move_dispatches_strategy() {
        let input = BotInput::new(board("XX.O....."), Mark::O);
        let mut rng = SessionRng::new(0);
        assert_eq!(calculate_move(BotStrategy::Heuristic(Difficulty::Hard), &input, &mut rng), Some(2));
        assert_eq!(calculate_move(BotStrategy::Perfect, &input, &mut rng), Some(2));
    }
}
