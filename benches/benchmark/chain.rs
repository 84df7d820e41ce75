use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use fault_rail::{chain, ChainedError};
use std::hint::black_box;

fn nested(depth: usize) -> ChainedError {
    let mut err = ChainedError::wrap(DomainError::Validation("bad input".to_string()), "layer_0");
    for i in 1..depth {
        err = ChainedError::wrap(err, format!("layer_{i}"));
    }
    err
}

pub fn bench_is(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/is_root");
    let target = DomainError::Validation("bad input".to_string());

    for depth in [1, 8, 32] {
        let err = nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(chain::is(err, &target)))
        });
    }
    group.finish();
}

pub fn bench_as_into(c: &mut Criterion) {
    let err = nested(8);

    c.bench_function("chain/as_into_depth_8", |b| {
        b.iter(|| {
            let mut slot: Option<DomainError> = None;
            black_box(chain::as_into(&err, &mut slot));
            black_box(slot)
        })
    });
}

criterion_group! {
    name = chain_benches;
    config = configure_criterion();
    targets = bench_is, bench_as_into
}
