use std::io::BufRead;
use tokio::sync::mpsc;

use common::games::snake::{Direction, SnakeCommand};
use common::log;

pub fn parse_command(line: &str) -> Option<SnakeCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => SnakeCommand::Turn(Direction::Up),
        "s" | "down" => SnakeCommand::Turn(Direction::Down),
        "a" | "left" => SnakeCommand::Turn(Direction::Left),
        "d" | "right" => SnakeCommand::Turn(Direction::Right),
        "" | "start" => SnakeCommand::Start,
        "r" | "restart" => SnakeCommand::Restart,
        "q" | "quit" => SnakeCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Reads stdin on its own thread so a pending read never holds up shutdown.
pub fn spawn_stdin_reader(command_tx: mpsc::UnboundedSender<SnakeCommand>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };

            let Some(command) = parse_command(&line) else {
                log!("Unknown input: {:?}", line);
                continue;
            };

            if command_tx.send(command).is_err() || command == SnakeCommand::Quit {
                break;
            }
        }
    });
}
