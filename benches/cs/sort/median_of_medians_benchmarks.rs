use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use threshold_select::find_kth;

fn random_values(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_of_medians");
    for &len in &[1_000, 10_000, 100_000] {
        let values = random_values(len);
        group.bench_with_input(BenchmarkId::new("find_kth", len), &values, |b, values| {
            b.iter(|| find_kth(black_box(values), values.len() / 2).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sort", len), &values, |b, values| {
            b.iter(|| {
                let mut copy = black_box(values).clone();
                copy.sort_unstable();
                copy[copy.len() / 2]
            })
        });
    }
    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let values: Vec<u8> = (0..100_000).map(|_| rng.gen_range(0..4)).collect();
    c.bench_function("find_kth_duplicates", |b| {
        b.iter(|| find_kth(black_box(&values), values.len() / 3).unwrap())
    });
}

criterion_group!(benches, bench_median, bench_duplicates);
criterion_main!(benches);
