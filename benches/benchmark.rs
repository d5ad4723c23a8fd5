use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use avlmap::{AvlTreeMap, AvlTreeSet};

const N: usize = 50_000;

fn shuffled_keys(seed: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..N as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

pub fn map_benchmarks(c: &mut Criterion) {
    let keys = shuffled_keys(7);

    c.bench_function("map_insert_shuffled", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for &key in &keys {
                map.insert(key, key.wrapping_mul(31));
            }
            black_box(map.len())
        })
    });

    c.bench_function("map_insert_ascending", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for key in 0..N as u64 {
                map.insert(key, key);
            }
            black_box(map.len())
        })
    });

    let map: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k.wrapping_mul(31))).collect();

    c.bench_function("map_get_hit_and_miss", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(map.get(&key));
                black_box(map.get(&(key + N as u64)));
            }
        })
    });

    c.bench_function("map_iter_in_order", |b| {
        b.iter(|| {
            map.iter()
                .map(|(_, v)| v)
                .fold(0u64, |acc, &v| acc.wrapping_add(v))
        })
    });

    c.bench_function("map_remove_half", |b| {
        b.iter(|| {
            let mut map = map.clone();
            for key in &keys[..N / 2] {
                map.remove(key);
            }
            black_box(map.len())
        })
    });

    c.bench_function("map_serialize", |b| {
        let map: AvlTreeMap<u64, u64> = (0..1024).map(|k| (k, k)).collect();
        b.iter(|| black_box(map.serialize()).len())
    });
}

pub fn set_benchmarks(c: &mut Criterion) {
    let keys = shuffled_keys(11);

    c.bench_function("set_insert_shuffled", |b| {
        b.iter(|| {
            let mut set = AvlTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            black_box(set.len())
        })
    });

    let set: AvlTreeSet<u64> = keys.iter().copied().collect();

    c.bench_function("set_contains_hit_and_miss", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(set.contains(&key));
                black_box(set.contains(&(key + N as u64)));
            }
        })
    });
}

criterion_group!(benches, map_benchmarks, set_benchmarks);
criterion_main!(benches);
