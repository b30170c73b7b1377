//! Benchmarks for per-sample color scale evaluation.
//!
//! Run with: cargo bench --package color-scales
//! Or: cargo bench --package color-scales --bench scale_benchmarks -- segmented

use color_scales::{
    extended_sinebow_color, segmented_color_scale, wind_intensity_color_scale, Breakpoint,
    ColorScale, ScaleDefinition,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

const TEMPERATURE: &[Breakpoint] = &[
    (193.0, [37, 4, 42]),
    (206.0, [41, 10, 130]),
    (219.0, [81, 40, 40]),
    (233.15, [192, 37, 149]),
    (255.372, [70, 215, 215]),
    (273.15, [21, 84, 187]),
    (275.15, [24, 132, 14]),
    (291.0, [247, 251, 59]),
    (298.0, [235, 167, 21]),
    (311.0, [230, 71, 39]),
    (328.0, [88, 27, 67]),
];

/// Surface temperatures in Kelvin, roughly what a global frame samples.
fn generate_temperatures(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(200.0..320.0)).collect()
}

fn bench_segmented(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmented");
    let scale = segmented_color_scale(TEMPERATURE).expect("valid breakpoints");

    for size in [256 * 256, 1024 * 1024] {
        let samples = generate_temperatures(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("temperature", size), &samples, |b, samples| {
            b.iter(|| {
                for &t in samples {
                    black_box(scale.at(t, 255.0));
                }
            })
        });
    }
    group.finish();
}

fn bench_sinebow(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinebow");
    let samples: Vec<f64> = (0..65_536).map(|i| i as f64 / 65_535.0).collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("extended_direct", |b| {
        b.iter(|| {
            for &i in &samples {
                black_box(extended_sinebow_color(i, 255.0));
            }
        })
    });

    let boxed = ScaleDefinition::ExtendedSinebow {
        bounds: Some([0.0, 100.0]),
    }
    .build()
    .expect("valid bounds");
    group.bench_function("extended_boxed_bounded", |b| {
        b.iter(|| {
            for &i in &samples {
                black_box(boxed.color(i * 100.0, 255.0));
            }
        })
    });
    group.finish();
}

fn bench_wind_index(c: &mut Criterion) {
    let scale = wind_intensity_color_scale(10, 100.0).expect("valid scale");
    let mut rng = rand::thread_rng();
    let magnitudes: Vec<f64> = (0..65_536).map(|_| rng.gen_range(0.0..120.0)).collect();

    c.bench_function("wind_index_for", |b| {
        b.iter(|| {
            for &m in &magnitudes {
                black_box(scale.index_for(m));
            }
        })
    });
}

criterion_group!(benches, bench_segmented, bench_sinebow, bench_wind_index);
criterion_main!(benches);
