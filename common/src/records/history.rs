use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::GameRecord;

pub const HISTORY_CAPACITY: usize = 50;

/// The most recent finished games; the oldest one drops out once full.
pub struct GameHistory {
    records: AllocRingBuffer<GameRecord>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            records: AllocRingBuffer::new(HISTORY_CAPACITY),
        }
    }

    /// `records` is expected newest first, the order `newest_first` produces.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let mut history = Self::new();
        for record in records.into_iter().take(HISTORY_CAPACITY).rev() {
            history.push(record);
        }
        history
    }

    pub fn push(&mut self, record: GameRecord) {
        self.records.enqueue(record);
    }

    pub fn newest_first(&self) -> Vec<GameRecord> {
        self.records.iter().rev().cloned().collect()
    }

    pub fn latest(&self) -> Option<&GameRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
