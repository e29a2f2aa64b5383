use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_wordsearch::core::{cell_run, find_word, GridGenerator, SelectionEngine};
use tui_wordsearch::types::{GridPos, PointerOffset};

const CELL: f32 = 16.0;

fn word_list() -> Vec<String> {
    ["COMPILER", "BORROW", "TRAIT", "CRATE", "MACRO", "ENUM", "CLOSURE", "LIFETIME"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let words = word_list();

    c.bench_function("generate_grid_8_words", |b| {
        b.iter(|| GridGenerator::new(black_box(12345)).generate(&words).unwrap())
    });
}

fn bench_cell_run(c: &mut Criterion) {
    c.bench_function("cell_run_diagonal_10", |b| {
        b.iter(|| {
            cell_run(
                black_box(GridPos::new(0, 0)),
                black_box(GridPos::new(9, 9)),
                10,
                10,
            )
        })
    });
}

fn bench_full_drag(c: &mut Criterion) {
    let words = word_list();
    let generated = GridGenerator::new(12345).generate(&words).unwrap();
    let mut engine = SelectionEngine::new(generated.grid, &words);

    c.bench_function("drag_start_move_end", |b| {
        b.iter(|| {
            engine.on_drag_start(PointerOffset::new(8.0, 8.0), CELL);
            engine.on_drag(PointerOffset::new(8.0 + CELL * 5.0, 8.0));
            engine.on_drag_end()
        })
    });
}

fn bench_hint_scan(c: &mut Criterion) {
    let words = word_list();
    let generated = GridGenerator::new(12345).generate(&words).unwrap();

    c.bench_function("find_word_in_grid", |b| {
        b.iter(|| find_word(black_box(&generated.grid), "LIFETIME"))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_cell_run,
    bench_full_drag,
    bench_hint_scan
);
criterion_main!(benches);
