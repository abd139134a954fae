use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Board, Difficulty, GameMode, Outcome, TicTacToeGameState};
use super::{GameHistory, GameStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Milliseconds since the Unix epoch at the time the game finished.
    pub id: i64,
    pub date: String,
    pub result: Outcome,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub board: Board,
}

impl GameRecord {
    pub fn from_finished_game(state: &TicTacToeGameState, finished_at: DateTime<Utc>) -> Option<Self> {
        if !state.is_over() {
            return None;
        }
        Some(Self {
            id: finished_at.timestamp_millis(),
            date: finished_at.to_rfc3339(),
            result: state.status,
            difficulty: state.difficulty,
            mode: state.mode,
            board: state.board,
        })
    }
}

/// On-disk shape of the stats and history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub stats: GameStats,
    #[serde(default)]
    pub history: Vec<GameRecord>,
}

#[derive(Default)]
pub struct GameRecorder {
    stats: GameStats,
    history: GameHistory,
}

impl GameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Records) -> Self {
        Self {
            stats: records.stats,
            history: GameHistory::from_records(records.history),
        }
    }

    pub fn to_records(&self) -> Records {
        Records {
            stats: self.stats,
            history: self.history.newest_first(),
        }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Stores a finished game; unfinished games are ignored.
    pub fn record_game(&mut self, state: &TicTacToeGameState) -> Option<&GameRecord> {
        self.record_game_at(state, Utc::now())
    }

    pub fn record_game_at(
        &mut self,
        state: &TicTacToeGameState,
        finished_at: DateTime<Utc>,
    ) -> Option<&GameRecord> {
        let record = GameRecord::from_finished_game(state, finished_at)?;
        self.stats.record(record.result);
        self.history.push(record);
        self.history.latest()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use chrono::TimeZone;

    fn finished_game() -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(GameMode::Multiplayer, Difficulty::Medium);
        for (mark, index) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            state.place_mark(mark, index).unwrap();
        }
        state
    }

    #[test]
    fn test_unfinished_game_is_ignored() {
        let mut recorder = GameRecorder::new();
        let state = TicTacToeGameState::new(GameMode::Singleplayer, Difficulty::Easy);
        assert!(recorder.record_game(&state).is_none());
        assert_eq!(recorder.stats().total_games, 0);
        assert!(recorder.history().is_empty());
    }

    #[test]
    fn test_finished_game_updates_stats_and_history() {
        let mut recorder = GameRecorder::new();
        let finished_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let record = recorder.record_game_at(&finished_game(), finished_at).cloned().unwrap();

        assert_eq!(record.result, Outcome::XWon);
        assert_eq!(record.difficulty, Difficulty::Medium);
        assert_eq!(record.mode, GameMode::Multiplayer);
        assert_eq!(record.board.to_string(), "XXXOO....");
        assert_eq!(record.id, finished_at.timestamp_millis());
        assert!(record.date.starts_with("2026-03-01T12:00:00"));

        assert_eq!(recorder.stats().wins, 1);
        assert_eq!(recorder.history().len(), 1);
    }

    #[test]
    fn test_records_round_trip_through_recorder() {
        let mut recorder = GameRecorder::new();
        recorder.record_game(&finished_game());
        recorder.record_game(&finished_game());

        let restored = GameRecorder::from_records(recorder.to_records());
        assert_eq!(restored.stats(), recorder.stats());
        assert_eq!(restored.history().newest_first(), recorder.history().newest_first());
    }

    #[test]
    fn test_clear_history_keeps_stats() {
        let mut recorder = GameRecorder::new();
        recorder.record_game(&finished_game());
        recorder.clear_history();
        assert!(recorder.history().is_empty());
        assert_eq!(recorder.stats().total_games, 1);
    }
}
