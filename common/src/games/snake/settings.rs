use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub board_size: usize,
    pub tick_interval_ms: u64,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < 2 {
            return Err("board_size must be at least 2".to_string());
        }
        if self.board_size > 100 {
            return Err("board_size must not exceed 100".to_string());
        }
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}
