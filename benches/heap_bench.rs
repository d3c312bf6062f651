//! Criterion benchmarks for the dispatch heap.
//!
//! Uses shuffled synthetic shipments so timings reflect heap work, not
//! input order.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use u_dispatch::heap::{HeapConfig, PriorityHeap};
use u_dispatch::loader::Loader;
use u_dispatch::shipment::{CategorySet, ShipmentRecord};

fn synthetic_records(n: usize, seed: u64) -> Vec<ShipmentRecord> {
    let set = CategorySet::default();
    let codes: Vec<i64> = set.iter().collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut records: Vec<ShipmentRecord> = (0..n as i64)
        .map(|id| {
            let category = codes[rng.random_range(0..codes.len())];
            let urgency = rng.random_range(1..=3);
            let weight = rng.random_range(0..500);
            ShipmentRecord::new(id, category, urgency, weight, None, &set).unwrap()
        })
        .collect();
    records.shuffle(&mut rng);
    records
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert");

    for &n in &[100usize, 1_000, 10_000] {
        let records = synthetic_records(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                let config = HeapConfig::default().with_initial_capacity(1);
                let mut heap = PriorityHeap::with_config(&config);
                for r in records {
                    heap.insert(r.clone());
                }
                black_box(heap.size())
            })
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_drain");

    for &n in &[100usize, 1_000, 10_000] {
        let mut heap = PriorityHeap::new();
        for r in synthetic_records(n, 7) {
            heap.insert(r);
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &heap, |b, heap| {
            b.iter(|| black_box(heap.snapshot_sorted_descending()))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");
    group.sample_size(20);

    let mut csv = String::from("id,category,urgency,weight,description\n");
    for r in synthetic_records(5_000, 3) {
        csv.push_str(&format!(
            "{},{},{},{},item {}\n",
            r.id(),
            r.category(),
            r.urgency(),
            r.weight(),
            r.id()
        ));
    }
    let loader = Loader::default();

    group.bench_function("5000_lines", |b| {
        b.iter(|| {
            let mut heap = PriorityHeap::new();
            let report = loader.load_reader(black_box(csv.as_bytes()), &mut heap).unwrap();
            black_box(report.inserted)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_load);
criterion_main!(benches);
