#[macro_use]
extern crate criterion;
extern crate escapetime;
extern crate num;
extern crate num_cpus;

use criterion::{black_box, Criterion};
use escapetime::{FieldGenerator, FractalKind, IterationSpec, ViewportSpec};
use num::Complex;

fn generator(kind: FractalKind) -> FieldGenerator {
    FieldGenerator::new(
        128,
        128,
        kind,
        IterationSpec::new(100, 2.0).unwrap(),
        &ViewportSpec::default(),
    )
    .unwrap()
}

fn bench_single(c: &mut Criterion) {
    let g = generator(FractalKind::Mandelbrot);
    c.bench_function("mandelbrot 128 single", move |b| {
        b.iter(|| black_box(g.generate_single()))
    });
}

fn bench_threaded(c: &mut Criterion) {
    let g = generator(FractalKind::Julia(Complex::new(-0.8, 0.156)));
    let threads = num_cpus::get();
    c.bench_function("julia 128 threaded", move |b| {
        b.iter(|| black_box(g.generate(threads).unwrap()))
    });
}

criterion_group!(benches, bench_single, bench_threaded);
criterion_main!(benches);
