//! Benchmarks for contour tracing.
//!
//! Run with: cargo bench --package contour-trace --bench trace_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use contour_core::{generate_levels, Grid, ThresholdSpec};
use contour_trace::{assemble, cell, compute, render, smooth};
use test_utils::wave_grid;

/// Wave field with random noise added (more crossing segments).
fn noisy_grid(width: usize, height: usize) -> Grid {
    let mut rng = rand::thread_rng();
    let base = wave_grid(width, height);
    let samples = base
        .samples()
        .iter()
        .map(|&v| v + rng.gen_range(-5.0..5.0))
        .collect();
    Grid::from_flat(samples, width, height).expect("dimensions match")
}

// =============================================================================
// LEVEL GENERATION BENCHMARKS
// =============================================================================

fn bench_generate_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_levels");

    let ranges = [
        (0.0, 100.0, 10.0, "0-100_by_10"),
        (0.0, 100.0, 2.0, "0-100_by_2"),
        (-50.0, 50.0, 5.0, "neg50-50_by_5"),
    ];

    for (min, max, interval, name) in ranges {
        group.bench_with_input(
            BenchmarkId::new("levels", name),
            &(min, max, interval),
            |b, &(min, max, interval)| {
                b.iter(|| generate_levels(black_box(min), black_box(max), black_box(interval)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// CELL CLASSIFICATION BENCHMARKS
// =============================================================================

fn bench_march_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("march_cells");

    let sizes = [(64, 64), (128, 128), (256, 256), (512, 512)];

    for (width, height) in sizes {
        let smooth_grid = wave_grid(width, height).padded();
        let noisy = noisy_grid(width, height).padded();

        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("smooth_single_level", format!("{}x{}", width, height)),
            &smooth_grid,
            |b, grid| {
                b.iter(|| cell::march_cells(black_box(grid), black_box(50.0), true));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("noisy_single_level", format!("{}x{}", width, height)),
            &noisy,
            |b, grid| {
                b.iter(|| cell::march_cells(black_box(grid), black_box(50.0), true));
            },
        );
    }

    group.finish();
}

// =============================================================================
// RING ASSEMBLY BENCHMARKS
// =============================================================================

fn bench_assemble_rings(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_rings");

    let sizes = [(128, 128), (256, 256)];

    for (width, height) in sizes {
        let padded = wave_grid(width, height).padded();
        let segments = cell::march_cells(&padded, 50.0, true);

        group.throughput(Throughput::Elements(segments.len() as u64));

        group.bench_with_input(
            BenchmarkId::new(
                "smooth",
                format!("{}x{}_{}seg", width, height, segments.len()),
            ),
            &segments,
            |b, segs| {
                b.iter(|| assemble::assemble_rings(black_box(segs)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// RING SMOOTHING BENCHMARKS
// =============================================================================

fn bench_smooth_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_ring");

    let padded = wave_grid(256, 256).padded();
    let segments = cell::march_cells(&padded, 50.0, true);
    let rings = assemble::assemble_rings(&segments);
    let longest = rings
        .iter()
        .max_by_key(|r| r.len())
        .expect("wave grid has contours at level 50")
        .clone();

    for passes in [1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("passes", passes),
            &longest,
            |b, ring| {
                b.iter(|| smooth::smooth_ring(black_box(ring), black_box(passes)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// FULL PIPELINE BENCHMARKS
// =============================================================================

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    group.sample_size(20);

    let sizes = [(128, 128), (256, 256)];

    for (width, height) in sizes {
        let grid = wave_grid(width, height);

        let few = ThresholdSpec::Levels(vec![20.0, 40.0, 60.0, 80.0]);
        let many = ThresholdSpec::Levels((0..20).map(|i| 10.0 + i as f64 * 5.0).collect());

        group.bench_with_input(
            BenchmarkId::new("4_levels", format!("{}x{}", width, height)),
            &(grid.clone(), few),
            |b, (grid, spec)| {
                b.iter(|| compute(black_box(grid), black_box(spec), true));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("20_levels", format!("{}x{}", width, height)),
            &(grid.clone(), many),
            |b, (grid, spec)| {
                b.iter(|| compute(black_box(grid), black_box(spec), true));
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let grid = wave_grid(256, 256);
    let spec = ThresholdSpec::Levels(vec![30.0, 50.0, 70.0]);

    group.bench_function("render_256x256_3levels", |b| {
        b.iter(|| render(black_box(&grid), black_box(&spec), true));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_levels,
    bench_march_cells,
    bench_assemble_rings,
    bench_smooth_ring,
    bench_compute,
    bench_render,
);
criterion_main!(benches);
