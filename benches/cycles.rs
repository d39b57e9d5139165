use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spooky_ttt::{
    detect_cycles, new_game, play, random_playout, CellId, Entry, GameRng, GameState, PlayerId,
    SubcellId,
};

/// Eight marks joining cell 0 to every other cell: a spanning star with no loop.
fn dense_tree() -> GameState {
    let cell = |i: u8| CellId::ALL[i as usize];
    let sub = |i: u8| SubcellId::ALL[i as usize];
    (1..9u8).fold(new_game(), |game, i| {
        let turn = u32::from(i);
        game.with_entry(cell(0), sub(i), Entry::paired(PlayerId::FIRST, turn, cell(i)))
            .with_entry(cell(i), sub(0), Entry::paired(PlayerId::FIRST, turn, cell(0)))
    })
}

fn bench_detect_cycles(c: &mut Criterion) {
    let tree = dense_tree();
    c.bench_function("detect_cycles/star", |b| b.iter(|| detect_cycles(black_box(&tree))));

    let playout = random_playout(&new_game(), &mut GameRng::new(42), usize::MAX);
    let collapsed = playout.last().clone();
    c.bench_function("detect_cycles/collapsed_playout", |b| {
        b.iter(|| detect_cycles(black_box(&collapsed)))
    });
}

fn bench_play(c: &mut Criterion) {
    let opened = play(&new_game(), CellId::ALL[0], SubcellId::ALL[0]);
    c.bench_function("play/entangle", |b| {
        b.iter(|| play(black_box(&opened), CellId::ALL[1], SubcellId::ALL[0]))
    });
}

criterion_group!(benches, bench_detect_cycles, bench_play);
criterion_main!(benches);
