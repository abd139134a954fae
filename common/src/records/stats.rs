use serde::{Deserialize, Serialize};

use crate::games::tictactoe::Outcome;

/// Tallies from the human (`X`) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_games: u32,
}

impl GameStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWon => self.wins += 1,
            Outcome::OWon => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => return,
        }
        self.total_games = self.wins + self.losses + self.draws;
    }

    /// Percentage in `0.0..=100.0`.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.total_games) * 100.0
    }
}
