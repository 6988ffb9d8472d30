//! Benchmarks for scroll reconciliation over large row counts.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use splitgrid::{Cell, ColumnDescriptor, GridConfig, RecordingPane, Row, ViewportEngine};

fn build(rows: usize) -> ViewportEngine<RecordingPane> {
    let mut columns = vec![ColumnDescriptor::text("Name")];
    columns.extend((1..8).map(|i| ColumnDescriptor::amount(format!("C{i}"))));
    let mut grid = ViewportEngine::new(
        columns,
        GridConfig::default(),
        RecordingPane::new(),
        RecordingPane::new(),
    )
    .expect("valid grid");
    for i in 0..rows {
        let mut cells = vec![Cell::Text(format!("Level-{i}"))];
        cells.extend((1..8).map(|c| Cell::Amount((i * c) as f64)));
        grid.register_row(Row::new(cells));
    }
    grid.refresh().expect("initial draw");
    grid
}

/// Small wheel steps: mostly repositioning, one row in and one out
fn bench_wheel_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_step");
    for rows in [1_000usize, 100_000] {
        let mut grid = build(rows);
        let mut direction = 40.0;
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| {
                if grid.scroll_offset() >= grid.viewport().max_scroll() {
                    direction = -40.0;
                } else if grid.scroll_offset() <= 0.0 {
                    direction = 40.0;
                }
                grid.apply_scroll_delta(black_box(direction))
                    .expect("scroll")
            })
        });
    }
    group.finish();
}

/// Thumb jumps: the whole visible set is replaced each time
fn bench_jumps(c: &mut Criterion) {
    let mut grid = build(100_000);
    let mut fraction = 0.0;
    c.bench_function("scroll_to_fraction_100k", |b| {
        b.iter(|| {
            fraction = (fraction + 0.37) % 1.0;
            grid.scroll_to_fraction(black_box(fraction)).expect("jump")
        })
    });
}

criterion_group!(benches, bench_wheel_steps, bench_jumps);
criterion_main!(benches);
