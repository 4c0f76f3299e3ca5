use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sudoku::puzzle::Puzzle;
use sudoku::solve::solve;

fn bench_solve(c: &mut Criterion) {
    let sample =
        Puzzle::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/txt/sudoku-test1.txt")).unwrap();
    c.bench_function("solve sample puzzle", |b| {
        b.iter(|| {
            let mut puzzle = black_box(sample.clone());
            solve(&mut puzzle).is_solved()
        })
    });
    c.bench_function("solve empty puzzle", |b| {
        b.iter(|| {
            let mut puzzle = black_box(Puzzle::new());
            solve(&mut puzzle).is_solved()
        })
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
