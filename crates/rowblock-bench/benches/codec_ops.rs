//! Criterion micro-benchmarks for block save and load.

use criterion::{criterion_group, criterion_main, Criterion};
use rowblock_bench::reference_block;
use rowblock_store::RowBlockContainer;
use std::hint::black_box;

/// Benchmark: Save a 10K-row block.
fn bench_save_10k(c: &mut Criterion) {
    let block = reference_block(11, 10_000).unwrap();

    c.bench_function("save_block_10k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1 << 20);
            block.save(&mut buf).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: Load the same block into a reused container.
fn bench_load_10k(c: &mut Criterion) {
    let block = reference_block(11, 10_000).unwrap();
    let mut encoded = Vec::new();
    block.save(&mut encoded).unwrap();

    c.bench_function("load_block_10k", |b| {
        let mut target = RowBlockContainer::<u32>::new();
        b.iter(|| {
            let mut cursor = encoded.as_slice();
            assert!(target.load(&mut cursor).unwrap());
            black_box(target.nnz());
        });
    });
}

criterion_group!(benches, bench_save_10k, bench_load_10k);
criterion_main!(benches);
