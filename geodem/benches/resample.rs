use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geodem::{height_at, ElevationGrid, Heightmap, WorldExtent};

/// Build a synthetic normalized grid with a diagonal gradient.
fn synthetic_grid(rows: usize, columns: usize) -> ElevationGrid {
    let data = (0..rows * columns)
        .map(|i| {
            let r = i / columns;
            let c = i % columns;
            ((r + c) % 512) as f32 / 511.0
        })
        .collect();
    ElevationGrid::new(rows, columns, data)
}

fn extent_for(rows: usize, columns: usize) -> WorldExtent {
    WorldExtent {
        x_range: (rows as f32 - 1.0) * 30.0,
        y_range: 1000.0,
        z_range: (columns as f32 - 1.0) * 30.0,
    }
}

fn bench_resample_513(c: &mut Criterion) {
    let grid = synthetic_grid(1024, 1024);
    let extent = extent_for(1024, 1024);

    c.bench_function("resample_1024_to_513", |b| {
        b.iter(|| {
            black_box(Heightmap::resample(
                black_box(&grid),
                black_box(&extent),
                513,
            ));
        });
    });
}

fn bench_resample_upscale(c: &mut Criterion) {
    let grid = synthetic_grid(256, 256);
    let extent = extent_for(256, 256);

    c.bench_function("resample_256_to_1025", |b| {
        b.iter(|| {
            black_box(Heightmap::resample(
                black_box(&grid),
                black_box(&extent),
                1025,
            ));
        });
    });
}

fn bench_single_sample(c: &mut Criterion) {
    let grid = synthetic_grid(1024, 1024);
    let extent = extent_for(1024, 1024);

    c.bench_function("height_at_single", |b| {
        b.iter(|| {
            black_box(height_at(
                black_box(&grid),
                black_box(&extent),
                black_box(12345.6),
                black_box(7890.1),
            ));
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let raw = ElevationGrid::new(
        1024,
        1024,
        (0..1024 * 1024).map(|i| (i % 2720) as f32).collect(),
    );

    c.bench_function("normalize_1024", |b| {
        b.iter(|| {
            black_box(raw.normalize(black_box(0.0), black_box(2720.0)).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_resample_513,
    bench_resample_upscale,
    bench_single_sample,
    bench_normalize,
);
criterion_main!(benches);
