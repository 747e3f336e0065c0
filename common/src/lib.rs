pub mod config;
pub mod defaults;
pub mod games;
pub mod logger;
pub mod score_store;

pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
