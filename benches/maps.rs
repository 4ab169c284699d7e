#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use keyslot::{ChainMap, ProbeMap};
use proptest::collection::vec;
use proptest::prelude::any;
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

const ITEMS_AMOUNT: usize = 1000;
// Prime comfortably above the corpus size; these maps never grow
const SLOT_CAPACITY: usize = 3079;
const SAMPLE_SIZE: usize = 10;

fn map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, u64)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Fixed-capacity map comparison");
    group.sample_size(SAMPLE_SIZE);

    // Fresh maps per iteration: both variants keep duplicate keys, so
    // re-inserting the corpus into one map would grow it every pass
    group.bench_function("probe insert", |b| {
        b.iter_batched(
            || ProbeMap::with_capacity(SLOT_CAPACITY),
            |mut map| {
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("chain insert", |b| {
        b.iter_batched(
            || ChainMap::with_capacity(SLOT_CAPACITY),
            |mut map| {
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("std insert", |b| {
        b.iter_batched(
            HashMap::new,
            |mut map| {
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    let mut probe_map = ProbeMap::with_capacity(SLOT_CAPACITY);
    probe_map.extend(items.iter().cloned());
    let mut chain_map = ChainMap::with_capacity(SLOT_CAPACITY);
    chain_map.extend(items.iter().cloned());
    let std_map: HashMap<String, u64> = items.iter().cloned().collect();

    group.bench_function("probe get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = probe_map.get(key);
            }
        });
    });
    group.bench_function("chain get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chain_map.get(key);
            }
        });
    });
    group.bench_function("std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = std_map.get(key);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, map_benches);

criterion_main!(benches);
