mod config;
mod input;
mod render;
mod store;

use clap::Parser;
use tokio::sync::mpsc;

use common::config::Validate;
use common::games::SessionRng;
use common::games::snake::{GameEngine, SnakeSession};
use common::logger::{self, LogTarget};
use common::{log, FileScoreStore, MemoryScoreStore};
use config::get_config_manager;
use render::TerminalBroadcaster;
use store::ClientScoreStore;

#[derive(Parser)]
#[command(name = "grid_snake", about = "Snake on a wrapping grid")]
struct Args {
    /// Path of the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    board_size: Option<usize>,
    #[arg(long)]
    tick_interval_ms: Option<u64>,
    /// Fixed food placement seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the best score in memory only.
    #[arg(long)]
    no_persist: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stderr);

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(board_size) = args.board_size {
        config.snake.board_size = board_size;
    }
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.snake.tick_interval_ms = tick_interval_ms;
    }
    config.validate()?;

    let score_store = if args.no_persist {
        ClientScoreStore::Memory(MemoryScoreStore::new())
    } else {
        ClientScoreStore::File(FileScoreStore::from_yaml_file(&config.score_file))
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Food seed: {}", rng.seed());

    let engine = GameEngine::new(&config.snake, score_store, rng)?;
    let session = SnakeSession::new(&config.snake);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    input::spawn_stdin_reader(command_tx);

    let summary = session.run(engine, command_rx, TerminalBroadcaster).await;
    log!(
        "Played {} game(s), best score {}",
        summary.games_played,
        summary.best_score
    );

    Ok(())
}
