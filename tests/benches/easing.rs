extern crate cadence;
extern crate cadence_tests;
#[macro_use]
extern crate criterion;

use cadence::geom::{CubicBezierCurve, SolverOptions};
use cadence::timing::{TimingCurve, TimingParameters};
use cadence_tests::*;
use criterion::{BenchmarkId, Criterion};

const N: u32 = 100;

fn forward(c: &mut Criterion) {
    let curves = generate_easing_curves();
    c.bench_function("evaluate_at", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for curve in &curves {
                for t in sample_times(N) {
                    sum += curve.evaluate_at(t).relative_value;
                }
            }
            std::hint::black_box(sum);
        })
    });
}

fn inverse(c: &mut Criterion) {
    let curves = generate_easing_curves();
    let mut g = c.benchmark_group("inverse");
    g.bench_function("evaluate_inverse_at", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for curve in &curves {
                for t in sample_times(N) {
                    sum += curve.evaluate_inverse_at(t).relative_value;
                }
            }
            std::hint::black_box(sum);
        })
    });

    let options = SolverOptions::imaginary_tolerance(1e-9);
    g.bench_function("try_evaluate_inverse_at", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for curve in &curves {
                for t in sample_times(N) {
                    if let Ok(point) = curve.try_evaluate_inverse_at(t, &options) {
                        sum += point.relative_value;
                    }
                }
            }
            std::hint::black_box(sum);
        })
    });
}

fn progressions(c: &mut Criterion) {
    let curves = [
        ("ease", TimingCurve::Cubic(CubicBezierCurve::EASE)),
        ("spring", TimingCurve::Spring(Default::default())),
    ];
    let mut g = c.benchmark_group("progressions");
    for (name, curve) in &curves {
        g.bench_with_input(BenchmarkId::new(*name, 120), curve, |b, curve| {
            b.iter(|| std::hint::black_box(curve.progressions(1.0, 120.0)))
        });
    }
}

criterion_group!(easing, forward, inverse, progressions);

criterion_main!(easing);
