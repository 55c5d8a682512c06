//! Benchmarks for polynomial arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cofactor_poly::{div_rem, gcd, Polynomial};
use cofactor_rings::rationals::Q;

/// Generates a polynomial with integer coefficients.
fn sample_poly_q(degree: usize) -> Polynomial<Q> {
    let coeffs: Vec<Q> = (0..=degree)
        .map(|i| Q::from_integer((i as i64 % 100) - 50))
        .collect();
    Polynomial::new(coeffs)
}

fn bench_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = sample_poly_q(size);
        let q = sample_poly_q(size);

        group.bench_with_input(BenchmarkId::new("Polynomial<Q>", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q))
        });
    }

    group.finish();
}

fn bench_polynomial_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div_rem");

    for size in [16, 64, 256] {
        let a = sample_poly_q(2 * size);
        let b = sample_poly_q(size);

        group.bench_with_input(BenchmarkId::new("Polynomial<Q>", size), &size, |bench, _| {
            bench.iter(|| black_box(div_rem(&a, &b)))
        });
    }

    group.finish();
}

fn bench_polynomial_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_gcd");
    group.sample_size(20);

    for size in [8, 16, 32] {
        let shared = sample_poly_q(size);
        let a = &shared * &sample_poly_q(size + 3);
        let b = &shared * &Polynomial::x();

        group.bench_with_input(BenchmarkId::new("Polynomial<Q>", size), &size, |bench, _| {
            bench.iter(|| black_box(gcd(&a, &b)))
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_eval");

    let point = Q::new(3, 7);
    for size in [16, 256] {
        let p = sample_poly_q(size);
        group.bench_with_input(BenchmarkId::new("horner", size), &size, |b, _| {
            b.iter(|| black_box(p.eval(&point)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_polynomial_multiplication,
    bench_polynomial_division,
    bench_polynomial_gcd,
    bench_evaluation
);

criterion_main!(benches);
