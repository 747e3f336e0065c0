pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
pub const DEFAULT_SCORE_FILE: &str = "grid_snake_best_score.yaml";
