use std::io::Write;

use common::games::snake::{FrameBroadcaster, GameOverSummary, GamePhase, Grid, Point, SnakeFrame};
use common::log;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn render_frame(frame: &SnakeFrame) -> String {
    let Some(grid) = Grid::new(frame.board_size) else {
        return String::new();
    };

    let mut cells = vec!['.'; grid.cell_count()];
    let mut paint = |pos: Point, mark: char| {
        if grid.contains(pos) {
            cells[grid.cell_index(pos)] = mark;
        }
    };
    for segment in frame.snake.iter().skip(1) {
        paint(*segment, 'o');
    }
    if let Some(head) = frame.head() {
        paint(head, '#');
    }
    if let Some(food) = frame.food {
        paint(food, '*');
    }

    let mut out = String::with_capacity(cells.len() * 2 + 64);
    for row in cells.chunks(grid.size()) {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out.push_str(&format!("Score: {}", frame.score));
    if frame.best_score > 0 {
        out.push_str(&format!("  Best: {}", frame.best_score));
    }
    out.push('\n');

    let status = match frame.phase {
        GamePhase::Idle => "Press Enter to start. Steer with w/a/s/d, q quits.",
        GamePhase::Running => "w/a/s/d + Enter to steer, r restarts, q quits.",
        GamePhase::GameOver => "Game over. r + Enter to play again, q quits.",
    };
    out.push_str(status);
    out.push('\n');
    out
}

#[derive(Clone)]
pub struct TerminalBroadcaster;

impl TerminalBroadcaster {
    fn write(text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = write!(stdout, "{}{}", CLEAR_SCREEN, text).and_then(|_| stdout.flush()) {
            log!("Failed to draw frame: {}", e);
        }
    }
}

impl FrameBroadcaster for TerminalBroadcaster {
    async fn broadcast_frame(&self, frame: SnakeFrame) {
        Self::write(&render_frame(&frame));
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        if summary.new_best {
            log!("New best score: {}", summary.best_score);
        } else {
            log!("Game over with {} (best {})", summary.final_score, summary.best_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(best_score: u32, phase: GamePhase) -> SnakeFrame {
        SnakeFrame {
            board_size: 3,
            snake: vec![Point::new(1, 1), Point::new(1, 2)],
            food: Some(Point::new(0, 0)),
            score: 2,
            best_score,
            phase,
        }
    }

    #[test]
    fn test_render_places_cells_by_index() {
        let text = render_frame(&frame(0, GamePhase::Running));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "* . .");
        assert_eq!(rows[1], ". # .");
        assert_eq!(rows[2], ". o .");
        assert_eq!(rows[3], "Score: 2");
    }

    #[test]
    fn test_cells_off_the_board_are_skipped() {
        let mut off_board = frame(0, GamePhase::Running);
        off_board.food = Some(Point::new(3, 0));
        let text = render_frame(&off_board);
        assert!(!text.contains('*'));
        assert_eq!(text.lines().next(), Some(". . ."));
    }

    #[test]
    fn test_best_score_only_shown_when_positive() {
        let text = render_frame(&frame(7, GamePhase::GameOver));
        assert!(text.contains("Score: 2  Best: 7"));
        assert!(text.contains("Game over"));
    }
}
