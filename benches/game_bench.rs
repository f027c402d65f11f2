//! Shuffle and scripted-game throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use match_pairs::{build_deck, CellId, DesignRegistry, GameBuilder, GameRng, MatchCoordinator};

fn find_match(game: &MatchCoordinator) -> (CellId, CellId) {
    let grid = game.grid().expect("grid present");
    for (a, ca) in grid.iter() {
        if ca.is_matched() || ca.is_face_up() {
            continue;
        }
        for (b, cb) in grid.iter() {
            if b > a && !cb.is_matched() && !cb.is_face_up() && cb.face() == ca.face() {
                return (a, b);
            }
        }
    }
    unreachable!("an unfinished grid always holds a hidden pair");
}

fn bench_deck_shuffle(c: &mut Criterion) {
    let designs = DesignRegistry::standard();
    c.bench_function("deck_shuffle_15_pairs", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| black_box(build_deck(15, &designs, &mut rng).unwrap()));
    });
}

fn bench_scripted_game(c: &mut Criterion) {
    c.bench_function("scripted_4x4_game", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().seed(42).build();
            game.start_new_game(4, 4).unwrap();
            // Through the reveal and hide
            for _ in 0..130 {
                game.tick(0.02);
            }
            // Flip known pairs until the board is cleared
            while game.grid().is_some() {
                let (a, b) = find_match(&game);
                game.request_flip(a);
                for _ in 0..16 {
                    game.tick(0.02);
                }
                game.request_flip(b);
                for _ in 0..16 {
                    game.tick(0.02);
                }
            }
            black_box(game.drain_events())
        });
    });
}

criterion_group!(benches, bench_deck_shuffle, bench_scripted_game);
criterion_main!(benches);
