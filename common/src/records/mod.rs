mod file_io;
mod history;
mod recorder;
mod stats;

pub use file_io::{RecordsError, load_records, save_records};
pub use history::{GameHistory, HISTORY_CAPACITY};
pub use recorder::{GameRecord, GameRecorder, Records};
pub use stats::GameStats;

pub const RECORDS_FILE_EXTENSION: &str = "yaml";
