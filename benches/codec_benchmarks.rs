//! Benchmarks for the board encodings.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, StateCodec, STARTING_PLACEMENT};
use chess_rules::{ChessGame, HeadlessHost};

const POSITIONS: [(&str, &str); 3] = [
    ("startpos", STARTING_PLACEMENT),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"),
    ("endgame", "8/5k2/8/8/8/8/5K2/4R3"),
];

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for (name, placement) in POSITIONS {
        group.bench_with_input(BenchmarkId::new("import", name), &placement, |b, placement| {
            b.iter(|| {
                let mut board = Board::empty();
                board.import_placement(black_box(placement));
                board
            })
        });

        let board = Board::from_placement(placement);
        group.bench_with_input(BenchmarkId::new("export", name), &board, |b, board| {
            b.iter(|| black_box(board.to_placement()))
        });
    }

    group.finish();
}

fn bench_state_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_string");

    for (name, placement) in POSITIONS {
        let board = Board::from_placement(placement);
        group.bench_with_input(BenchmarkId::new("export", name), &board, |b, board| {
            b.iter(|| black_box(board.state_string()))
        });

        let snapshot = board.state_string();
        for codec in [StateCodec::Full, StateCodec::Legacy] {
            group.bench_with_input(
                BenchmarkId::new(format!("import_{codec}"), name),
                &snapshot,
                |b, snapshot| {
                    let mut target = Board::empty();
                    b.iter(|| target.set_state_string(black_box(snapshot), codec))
                },
            );
        }
    }

    group.finish();
}

fn bench_game_restore(c: &mut Criterion) {
    let mut game = ChessGame::new(HeadlessHost::new());
    game.setup();
    let snapshot = game.initial_state_string();

    c.bench_function("game_restore_startpos", |b| {
        b.iter(|| game.set_state_string(black_box(&snapshot)))
    });
}

criterion_group!(benches, bench_placement, bench_state_string, bench_game_restore);
criterion_main!(benches);
