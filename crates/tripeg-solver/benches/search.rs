//! Benchmarks for the exhaustive jump-sequence search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use tripeg_core::{Board, Point};
use tripeg_solver::{explore, find_minimum};

fn bench_explore_edge_removal(c: &mut Criterion) {
    c.bench_function("explore_edge_removal", |b| {
        b.iter(|| {
            let mut board = Board::new(hint::black_box(Point::new(0, 1)));
            let mut solutions = 0_u64;
            explore(&mut board, &mut |_, _| solutions += 1);
            hint::black_box(solutions)
        });
    });
}

fn bench_find_minimum(c: &mut Criterion) {
    c.bench_function("find_minimum", |b| {
        b.iter(|| hint::black_box(find_minimum().turns()));
    });
}

criterion_group!(benches, bench_explore_edge_removal, bench_find_minimum);
criterion_main!(benches);
