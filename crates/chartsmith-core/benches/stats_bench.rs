use chartsmith_core::stats::{five_number_summary, moving_average, outliers};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_values(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        v.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    v
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("five_number_summary");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let data = gen_values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            b.iter(|| black_box(five_number_summary(d)));
        });
    }
    group.finish();
}

fn bench_outliers(c: &mut Criterion) {
    let mut group = c.benchmark_group("outliers");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            b.iter(|| black_box(outliers(d)));
        });
    }
    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    let data = gen_values(10_000);
    for &w in &[5usize, 20usize, 60usize] {
        group.bench_with_input(BenchmarkId::from_parameter(w), &w, |b, &w| {
            b.iter(|| black_box(moving_average(&data, w)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_summary, bench_outliers, bench_moving_average);
criterion_main!(benches);
