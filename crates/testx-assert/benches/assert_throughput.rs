use std::fmt::Display;
use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use testx_assert::{almost_equal, captured, compile_pattern, error_matches_pattern, errors_equal};

fn comparison_benchmark(c: &mut Criterion) {
    let lhs_err = io::Error::new(io::ErrorKind::Other, "connection reset by peer");
    let rhs_err = io::Error::new(io::ErrorKind::Other, "connection reset by peer");
    let lhs: &dyn Display = &lhs_err;
    let rhs: &dyn Display = &rhs_err;
    c.bench_function("errors/equal", |b| {
        b.iter(|| errors_equal(Some(black_box(lhs)), Some(black_box(rhs))));
    });

    let pattern = compile_pattern(r"reset by \w+").expect("pattern");
    c.bench_function("errors/match_compiled", |b| {
        b.iter(|| error_matches_pattern(Some(black_box(lhs)), Some(&pattern)));
    });

    c.bench_function("float/almost_equal", |b| {
        b.iter(|| almost_equal(black_box(3f64.sqrt()), black_box(1.732), 1e-3));
    });
}

fn capture_benchmark(c: &mut Criterion) {
    c.bench_function("recover/no_panic", |b| {
        b.iter(|| captured(|| black_box(1u64) + 1));
    });

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    c.bench_function("recover/panic", |b| {
        b.iter(|| captured(|| std::panic::panic_any(black_box(7u32))));
    });
    std::panic::set_hook(previous);
}

criterion_group!(benches, comparison_benchmark, capture_benchmark);
criterion_main!(benches);
