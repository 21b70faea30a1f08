use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use packwise_packing::{CorrectPolicy, IncorrectPolicy, PackCatalog, PackPolicy};
use std::hint::black_box;

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let catalog = PackCatalog::standard();

    for quantity in [1_i64, 12_001, 250_000, 1_000_000] {
        group.throughput(Throughput::Elements(quantity.unsigned_abs()));

        group.bench_with_input(BenchmarkId::new("correct", quantity), &quantity, |b, &q| {
            b.iter(|| CorrectPolicy.solve_quantity(&catalog, black_box(q)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("incorrect", quantity), &quantity, |b, &q| {
            b.iter(|| IncorrectPolicy.solve_quantity(&catalog, black_box(q)).unwrap());
        });
    }

    group.finish();
}

fn bench_odd_catalog(c: &mut Criterion) {
    let catalog = PackCatalog::new([23, 31, 53]).expect("valid catalog");

    c.bench_function("correct_odd_catalog_500k", |b| {
        b.iter(|| CorrectPolicy.solve_quantity(&catalog, black_box(500_000)).unwrap());
    });
}

criterion_group!(benches, bench_policies, bench_odd_catalog);
criterion_main!(benches);
