use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::MemoryScoreStore;
use common::games::SessionRng;
use common::games::snake::{Direction, GameEngine, SnakeSettings, TickOutcome};

const TURNS: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

fn play_one_game(board_size: usize, seed: u64) -> u32 {
    let settings = SnakeSettings {
        board_size,
        ..SnakeSettings::default()
    };
    let mut engine = GameEngine::new(&settings, MemoryScoreStore::new(), SessionRng::new(seed))
        .expect("bench settings are valid");
    engine.start();

    for step in 0..10_000usize {
        if step % 7 == 0 {
            engine.set_direction(TURNS[(step / 7) % TURNS.len()]);
        }
        match engine.tick() {
            Some(TickOutcome::SelfCollision { final_score }) => return final_score,
            None => break,
            _ => {}
        }
    }
    engine.score()
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("game_10x10", |b| {
        b.iter(|| play_one_game(black_box(10), black_box(42)))
    });

    group.bench_function("game_50x50", |b| {
        b.iter(|| play_one_game(black_box(50), black_box(42)))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
