mod config;
mod game_config;
mod records_config;

use game_config::GameConfig;
use records_config::RecordsConfig;

pub use config::{ConfigHandle, get_config_manager, get_config_path};
