use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_party::core::{Board, GameState};
use tetris_party::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16), false);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_bomb(c: &mut Criterion) {
    c.bench_function("remove_bottom_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 10..20 {
                for x in 0..9 {
                    board.set(x, y, Some(PieceKind::L));
                }
            }
            board.remove_bottom_rows(black_box(2));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(black_box(1), 0);
            state.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snapshot = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_bomb,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
