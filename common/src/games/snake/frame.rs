use super::types::{GamePhase, Point};

/// Everything a presentation surface needs to draw one moment of a game.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeFrame {
    pub board_size: usize,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub best_score: u32,
    pub phase: GamePhase,
}

impl SnakeFrame {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub best_score: u32,
    pub new_best: bool,
}
