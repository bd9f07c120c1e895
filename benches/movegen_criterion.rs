use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bookboard::game_state::game_state::GameState;
use bookboard::hashing::FoldedSplitmixHasher;
use bookboard::move_generation::move_generator::generate_move_list;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_moves: usize,
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_moves: 20,
    },
    BenchCase {
        name: "castling_open",
        fen: "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1",
        expected_moves: 25,
    },
    BenchCase {
        name: "bare_promotion",
        fen: "8/P6k/8/8/8/8/8/K7 w - - 0 1",
        expected_moves: 7,
    },
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);

    for case in CASES {
        let game = GameState::from_fen(case.fen, Arc::new(FoldedSplitmixHasher::default()))
            .expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        let warmup = generate_move_list(&game).expect("generation should run");
        assert_eq!(
            warmup.len(),
            case.expected_moves,
            "move-count mismatch in warmup for {}",
            case.name
        );

        group.throughput(Throughput::Elements(case.expected_moves as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &case.expected_moves,
            |b, expected| {
                b.iter(|| {
                    let moves = generate_move_list(black_box(&game))
                        .expect("benchmark generation should succeed");
                    assert_eq!(moves.len(), *expected);
                    black_box(moves.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_undo");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);

    let game = GameState::new_game(Arc::new(FoldedSplitmixHasher::default()));

    group.bench_function("startpos_full_ply", |b| {
        b.iter(|| {
            let mut scratch = game.clone();
            let mut mv = scratch.legal_moves()[0].clone();
            scratch
                .apply_move(black_box(&mut mv))
                .expect("apply should succeed");
            scratch.undo_move(&mv).expect("undo should succeed");
            black_box(scratch.hash_key)
        });
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen, bench_apply_undo);
criterion_main!(movegen_benches);
