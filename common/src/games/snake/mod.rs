mod engine;
mod frame;
mod grid;
mod session;
mod settings;
mod snake;
mod types;

pub use engine::GameEngine;
pub use frame::{GameOverSummary, SnakeFrame};
pub use grid::Grid;
pub use session::{FrameBroadcaster, SessionSummary, SnakeCommand, SnakeSession};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Direction, GamePhase, Point, TickOutcome};
