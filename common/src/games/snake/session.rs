use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::log;
use crate::score_store::ScoreStore;
use super::engine::GameEngine;
use super::frame::{GameOverSummary, SnakeFrame};
use super::settings::SnakeSettings;
use super::types::{Direction, TickOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Start,
    Turn(Direction),
    Restart,
    Quit,
}

/// Presentation side of a session: receives every frame worth drawing.
pub trait FrameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_frame(&self, frame: SnakeFrame) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub best_score: u32,
}

/// Drives one engine: owns the tick cadence and applies input between ticks.
pub struct SnakeSession {
    tick_interval: Duration,
}

impl SnakeSession {
    pub fn new(settings: &SnakeSettings) -> Self {
        Self {
            tick_interval: settings.tick_interval(),
        }
    }

    /// Runs until `Quit` arrives or every command sender is dropped.
    pub async fn run<S, B>(
        self,
        mut engine: GameEngine<S>,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        broadcaster: B,
    ) -> SessionSummary
    where
        S: ScoreStore,
        B: FrameBroadcaster,
    {
        // Present only while the engine is running.
        let mut ticker: Option<Interval> = None;
        let mut games_played = 0u32;

        broadcaster.broadcast_frame(engine.snapshot()).await;

        loop {
            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    let previous_best = engine.best_score();
                    let Some(outcome) = engine.tick() else {
                        ticker = None;
                        continue;
                    };

                    broadcaster.broadcast_frame(engine.snapshot()).await;

                    if let TickOutcome::SelfCollision { final_score } = outcome {
                        ticker = None;
                        let best_score = engine.best_score();
                        broadcaster
                            .broadcast_game_over(GameOverSummary {
                                final_score,
                                best_score,
                                new_best: best_score > previous_best,
                            })
                            .await;
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        log!("Command channel closed, ending session");
                        break;
                    };

                    match command {
                        SnakeCommand::Start => {
                            if engine.start() {
                                games_played += 1;
                                ticker = Some(self.create_ticker());
                                broadcaster.broadcast_frame(engine.snapshot()).await;
                            }
                        }
                        SnakeCommand::Turn(direction) => {
                            engine.set_direction(direction);
                        }
                        SnakeCommand::Restart => {
                            engine.restart();
                            games_played += 1;
                            ticker = Some(self.create_ticker());
                            broadcaster.broadcast_frame(engine.snapshot()).await;
                        }
                        SnakeCommand::Quit => break,
                    }
                }
            }
        }

        SessionSummary {
            games_played,
            best_score: engine.best_score(),
        }
    }

    fn create_ticker(&self) -> Interval {
        let mut ticker = interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
