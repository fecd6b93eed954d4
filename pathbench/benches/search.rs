//! Criterion benchmarks comparing A* and Dijkstra on generated caves.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridpath_core::Point;
use gridpath_map::{CaveGen, TileMap, random_walkable};
use gridpath_paths::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A cave and 32 endpoint pairs drawn from its floor.
fn cave_with_pairs(size: i32, seed: u64) -> (TileMap, Vec<(Point, Point)>) {
    let map = CaveGen::with_seed(seed)
        .generate(size, size)
        .expect("valid cave size");
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut pairs = Vec::with_capacity(32);
    while pairs.len() < 32 {
        let a = random_walkable(&map, &mut rng).expect("cave has floor");
        let b = random_walkable(&map, &mut rng).expect("cave has floor");
        if a != b {
            pairs.push((a, b));
        }
    }
    (map, pairs)
}

fn bench_caves(c: &mut Criterion) {
    let mut group = c.benchmark_group("cave_search");
    for size in [32, 64, 128] {
        let (map, pairs) = cave_with_pairs(size, 17);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &pairs,
                |b, pairs| {
                    b.iter(|| {
                        for &(from, to) in pairs {
                            black_box(algorithm.run(from, to, &map));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

/// Open floor, opposite corners: the heuristic's best case.
fn bench_open_floor(c: &mut Criterion) {
    let map = TileMap::new(100, 100);
    let from = Point::new(0, 0);
    let to = Point::new(99, 99);
    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("open_floor_100/{}", algorithm.name()), |b| {
            b.iter(|| black_box(algorithm.run(black_box(from), black_box(to), &map)));
        });
    }
}

criterion_group!(benches, bench_caves, bench_open_floor);
criterion_main!(benches);
