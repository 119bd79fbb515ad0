use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_core::AssetId;
use stockroom_inventory::{AssetPatch, AssetStore, InMemoryAssetStore, NewAsset};

fn new_asset(i: usize) -> NewAsset {
    NewAsset::new(
        Some(format!("asset-{i}")),
        Some(i as i64),
        Some("Bench".to_string()),
    )
    .expect("valid bench input")
}

fn populated(size: usize) -> (InMemoryAssetStore, Vec<AssetId>) {
    let store = InMemoryAssetStore::new();
    let ids = (0..size).map(|i| store.create(new_asset(i)).id).collect();
    (store, ids)
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_create");
    for size in [100usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let store = InMemoryAssetStore::new();
                for i in 0..size {
                    black_box(store.create(new_asset(i)));
                }
            });
        });
    }
    group.finish();
}

fn bench_update_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_update_last");
    let patch = AssetPatch {
        qty: Some(42),
        ..AssetPatch::default()
    };
    for size in [100usize, 1_000, 10_000] {
        let (store, ids) = populated(size);
        let last = ids[size - 1];
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(store.update(last, &patch)));
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_list");
    for size in [100usize, 1_000, 10_000] {
        let (store, _) = populated(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(store.list()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_create, bench_update_last, bench_list);
criterion_main!(benches);
