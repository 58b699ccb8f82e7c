//! Performance benchmarks for dnatrie
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dnatrie::sequence::Sequence;
use dnatrie::similarity::similarity;
use dnatrie::tree::SuffixTree;

/// Deterministic pseudo-random bases
fn random_bases(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"ACGT"[(state % 4) as usize]
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &len in &[1_000usize, 10_000, 100_000] {
        let bases = random_bases(len, 0x2545_F491_4F6C_DD1D);
        group.bench_with_input(BenchmarkId::new("random", len), &bases, |b, bases| {
            b.iter(|| SuffixTree::from_bases(black_box(bases)))
        });
    }

    // Highly repetitive input exercises suffix links and skip/count
    let repeats = b"ACG".repeat(30_000);
    group.bench_function("repeat_90k", |b| {
        b.iter(|| SuffixTree::from_bases(black_box(&repeats)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let bases = random_bases(200_000, 7);
    let tree = SuffixTree::from_bases(&bases).expect("valid bases");

    let mut group = c.benchmark_group("search");

    for &plen in &[8usize, 64, 512] {
        let pattern = bases[100_000..100_000 + plen].to_vec();
        group.bench_with_input(BenchmarkId::new("present", plen), &pattern, |b, p| {
            b.iter(|| tree.find_first_occurrence(black_box(p)))
        });
    }

    let patterns: Vec<Vec<u8>> = (0..1_000)
        .map(|i| bases[i * 150..i * 150 + 20].to_vec())
        .collect();
    group.bench_function("batch_serial_1000", |b| {
        b.iter(|| tree.find_many(black_box(&patterns), usize::MAX))
    });
    group.bench_function("batch_parallel_1000", |b| {
        b.iter(|| tree.find_many(black_box(&patterns), 0))
    });

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for &len in &[100usize, 1_000] {
        let a = Sequence::from_bases(&random_bases(len, 11)).expect("valid bases");
        let b = Sequence::from_bases(&random_bases(len, 13)).expect("valid bases");
        group.bench_with_input(BenchmarkId::new("lcs", len), &(a, b), |bench, (a, b)| {
            bench.iter(|| similarity(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_search, bench_similarity);
criterion_main!(benches);
