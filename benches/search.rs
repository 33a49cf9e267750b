use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shiftac::board::{Board, Mark};
use shiftac::engine::get_engine_evaluations;
use shiftac::eval::EvalRegistry;
use shiftac::rules::legal_actions;
use shiftac::search::KeySet;

fn bench_legal_actions(c: &mut Criterion) {
    let mut board = Board::new();
    board.place_mark(shiftac::Pos::new(1, 1), Mark::X);
    board.place_mark(shiftac::Pos::new(3, 3), Mark::X);
    board.set_placements(Mark::X, 2);

    c.bench_function("legal_actions midgame", |b| {
        b.iter(|| legal_actions(black_box(&board), Mark::X));
    });
}

fn bench_opening_search(c: &mut Criterion) {
    let registry = EvalRegistry::with_builtins();
    let eval = registry.get_or_default("positional");
    let board = Board::new();
    let history = KeySet::default();

    c.bench_function("opening search depth 4", |b| {
        b.iter(|| get_engine_evaluations(black_box(&board), Mark::X, &history, 4, 3, &eval));
    });
}

criterion_group!(benches, bench_legal_actions, bench_opening_search);
criterion_main!(benches);
