use criterion::{black_box, criterion_group, criterion_main, Criterion};
use threshold_select::find_tail_with_tolerance;

fn bench_find_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("tail_finder");
    for &(name, x0) in &[("near", 5.3), ("far", 1.0e12)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                find_tail_with_tolerance(|x: f64| x >= black_box(x0), 1.0, 1e-9).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_tail);
criterion_main!(benches);
