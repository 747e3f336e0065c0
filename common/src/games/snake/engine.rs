use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use crate::score_store::ScoreStore;
use super::frame::SnakeFrame;
use super::grid::Grid;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Direction, GamePhase, Point, TickOutcome};

const INITIAL_DIRECTION: Direction = Direction::Up;

/// Single-player snake rules on a wrapping board.
///
/// The engine never schedules itself: a driver calls [`GameEngine::tick`]
/// at a fixed cadence while the phase is [`GamePhase::Running`]. Calls made
/// in the wrong phase are ignored rather than reported.
pub struct GameEngine<S: ScoreStore> {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Point>,
    score: u32,
    best_score: u32,
    phase: GamePhase,
    score_store: S,
    rng: SessionRng,
}

impl<S: ScoreStore> GameEngine<S> {
    pub fn new(settings: &SnakeSettings, score_store: S, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let grid = Grid::new(settings.board_size)
            .ok_or_else(|| "board_size must be positive".to_string())?;

        let best_score = match score_store.read() {
            Ok(Some(value)) => value,
            Ok(None) => 0,
            Err(e) => {
                log!("Failed to read best score, starting from 0: {}", e);
                0
            }
        };

        Ok(Self {
            grid,
            snake: initial_snake(&grid),
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food: None,
            score: 0,
            best_score,
            phase: GamePhase::Idle,
            score_store,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Buffers a turn for the next tick. A request on the axis of the latest
    /// accepted direction (buffered, else committed) is dropped, which covers
    /// both reversing and repeating it. Returns whether it was buffered.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let current = self.pending_direction.unwrap_or(self.direction);
        if requested.shares_axis(&current) {
            return false;
        }
        self.pending_direction = Some(requested);
        true
    }

    /// Idle -> Running. Returns `false` in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.food = self.place_food();
        self.phase = GamePhase::Running;
        log!("Game started, food at {:?}", self.food);
        true
    }

    /// Returns `None` unless the game is running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let head = self.snake.head()?;
        let next_head = self.grid.step(head, self.direction);

        if self.snake.contains(&next_head) {
            return Some(self.finish_game());
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = self.place_food();
            return Some(TickOutcome::Ate { score: self.score });
        }

        self.snake.pop_tail();
        Some(TickOutcome::Moved)
    }

    /// Resets to the opening position and starts immediately.
    pub fn restart(&mut self) {
        self.snake = initial_snake(&self.grid);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.food = None;
        self.phase = GamePhase::Idle;
        self.start();
    }

    pub fn snapshot(&self) -> SnakeFrame {
        SnakeFrame {
            board_size: self.grid.size(),
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            best_score: self.best_score,
            phase: self.phase,
        }
    }

    fn finish_game(&mut self) -> TickOutcome {
        self.phase = GamePhase::GameOver;
        log!("Self collision. Final score: {}", self.score);

        if self.score > self.best_score {
            self.best_score = self.score;
            if let Err(e) = self.score_store.write(self.score) {
                log!("Failed to persist best score {}: {}", self.score, e);
            }
        }

        TickOutcome::SelfCollision {
            final_score: self.score,
        }
    }

    /// Uniform per axis, rejecting cells under the snake. `None` once the
    /// snake covers the whole board.
    fn place_food(&mut self) -> Option<Point> {
        if self.snake.len() >= self.grid.cell_count() {
            return None;
        }

        let size = self.grid.size();
        loop {
            let pos = Point::new(self.rng.random_range(0..size), self.rng.random_range(0..size));
            if !self.snake.contains(&pos) {
                return Some(pos);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        self.snake = Snake::from_segments(segments.iter().copied());
        self.direction = direction;
        self.pending_direction = None;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

fn initial_snake(grid: &Grid) -> Snake {
    let center = grid.size() / 2;
    Snake::new(Point::new(center, center), INITIAL_DIRECTION, grid)
}
