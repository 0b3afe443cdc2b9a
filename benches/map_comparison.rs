use std::collections::HashMap as StdHashMap;
use std::hash::BuildHasher;
use std::hint::black_box;

use criterion::BatchSize;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use hopmap::HashMap as HopMap;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use siphasher::sip::SipHasher;

const SIZES: &[usize] = &[1 << 10, 1 << 16];

/// Keyed SipHash builder shared by all three maps so the comparison measures
/// table mechanics rather than hash quality.
#[derive(Clone)]
struct SipHashBuilder {
    k1: u64,
    k2: u64,
}

impl BuildHasher for SipHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new_with_keys(self.k1, self.k2)
    }
}

impl Default for SipHashBuilder {
    fn default() -> Self {
        let mut rng = OsRng;
        Self {
            k1: rng.try_next_u64().unwrap_or(0),
            k2: rng.try_next_u64().unwrap_or(0),
        }
    }
}

fn shuffled_keys(range: core::ops::Range<u64>) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(OsRng.try_next_u64().unwrap_or(0));
    let mut keys: Vec<u64> = range.collect();
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let builder = SipHashBuilder::default();

    for &size in SIZES {
        let keys = shuffled_keys(0..size as u64);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("hopmap/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = HopMap::with_hasher(builder.clone());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = StdHashMap::with_hasher(builder.clone());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = HashbrownHashMap::with_hasher(builder.clone());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    for (name, probe_offset) in [("find_hit", 0u64), ("find_miss", u64::MAX / 2)] {
        let mut group = c.benchmark_group(name);
        let builder = SipHashBuilder::default();

        for &size in SIZES {
            let keys = shuffled_keys(0..size as u64);
            let probes = shuffled_keys(probe_offset..probe_offset + size as u64);
            group.throughput(Throughput::Elements(size as u64));

            let mut hop = HopMap::with_hasher(builder.clone());
            let mut std_map = StdHashMap::with_hasher(builder.clone());
            let mut brown = HashbrownHashMap::with_hasher(builder.clone());
            for &key in &keys {
                hop.insert(key, key);
                std_map.insert(key, key);
                brown.insert(key, key);
            }

            group.bench_function(format!("hopmap/{size}"), |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for key in &probes {
                        if hop.get(key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            });
            group.bench_function(format!("std/{size}"), |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for key in &probes {
                        if std_map.get(key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            });
            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for key in &probes {
                        if brown.get(key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            });
        }

        group.finish();
    }
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    let builder = SipHashBuilder::default();

    for &size in SIZES {
        let keys = shuffled_keys(0..size as u64);
        let victims: Vec<u64> = keys.iter().copied().take(size / 2).collect();
        group.throughput(Throughput::Elements((size / 2) as u64));

        let mut hop = HopMap::with_hasher(builder.clone());
        let mut std_map = StdHashMap::with_hasher(builder.clone());
        let mut brown = HashbrownHashMap::with_hasher(builder.clone());
        for &key in &keys {
            hop.insert(key, key);
            std_map.insert(key, key);
            brown.insert(key, key);
        }

        group.bench_function(format!("hopmap/{size}"), |b| {
            b.iter_batched(
                || hop.clone(),
                |mut map| {
                    for key in &victims {
                        map.remove(key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || std_map.clone(),
                |mut map| {
                    for key in &victims {
                        map.remove(key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || brown.clone(),
                |mut map| {
                    for key in &victims {
                        map.remove(key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let builder = SipHashBuilder::default();

    for &size in SIZES {
        let keys = shuffled_keys(0..size as u64);
        group.throughput(Throughput::Elements(size as u64));

        let mut hop = HopMap::with_hasher(builder.clone());
        let mut std_map = StdHashMap::with_hasher(builder.clone());
        let mut brown = HashbrownHashMap::with_hasher(builder.clone());
        for &key in &keys {
            hop.insert(key, key);
            std_map.insert(key, key);
            brown.insert(key, key);
        }

        group.bench_function(format!("hopmap/{size}"), |b| {
            b.iter(|| black_box(hop.values().sum::<u64>()))
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| black_box(std_map.values().sum::<u64>()))
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| black_box(brown.values().sum::<u64>()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_find,
    bench_remove,
    bench_iterate
);
criterion_main!(benches);
