use crate::common::{configure_criterion, simulate_db_query, simulate_validation};
use criterion::{criterion_group, Criterion};
use fault_rail::recovery::recovery_point;
use fault_rail::traits::ResultExt;
use std::hint::black_box;

pub fn bench_fail_through(c: &mut Criterion) {
    c.bench_function("recovery/handle_mixed", |b| {
        b.iter(|| {
            let mut failures = 0u32;
            for id in 1..=100u64 {
                black_box(simulate_db_query(id).handle(|_| failures += 1));
            }
            black_box(failures)
        })
    });
}

pub fn bench_fail_fast(c: &mut Criterion) {
    c.bench_function("recovery/protect_success", |b| {
        b.iter(|| black_box(recovery_point(|_| (), || simulate_validation(black_box(7)).check())))
    });

    c.bench_function("recovery/protect_abort", |b| {
        b.iter(|| black_box(recovery_point(|_| (), || simulate_validation(black_box(50)).check())))
    });
}

criterion_group! {
    name = recovery_benches;
    config = configure_criterion();
    targets = bench_fail_through, bench_fail_fast
}
