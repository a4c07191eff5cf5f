use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockpilot_advisors::{AdvisoryOrchestrator, InventoryAdvisor};
use stockpilot_catalog::{CatalogSnapshot, Money, ProductRecord};
use stockpilot_core::ProductId;

/// Synthetic catalog mixing healthy, low, critical and overstocked records.
fn synthetic_snapshot(len: usize) -> CatalogSnapshot {
    let records = (0..len)
        .map(|i| {
            let (stock, min_stock) = match i % 4 {
                0 => (150, 50),  // healthy
                1 => (25, 30),   // low
                2 => (8, 25),    // critical
                _ => (600, 100), // overstocked
            };
            ProductRecord::new(
                ProductId::new(),
                format!("Product {i}"),
                format!("SKU-{i:05}"),
                stock,
                min_stock,
                Money::from_minor_units(1299),
            )
            .unwrap()
        })
        .collect();
    CatalogSnapshot::new(records)
}

fn bench_stock_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_rules");
    for size in [100usize, 1_000, 10_000] {
        let advisor = InventoryAdvisor::new(synthetic_snapshot(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(advisor.check_stock_levels()));
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");
    for size in [100usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut orchestrator =
                    AdvisoryOrchestrator::new(black_box(synthetic_snapshot(size)));
                black_box(orchestrator.run_all())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stock_rules, bench_full_pass);
criterion_main!(benches);
