use curve_core::{AxisKind, AxisLabeler};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_labels");
    let labeler = AxisLabeler::new(14.0);
    for &span in &[760.0f64, 4_000.0, 40_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, &s| {
            b.iter(|| black_box(labeler.place_labels(0.0, s, -12.5, 1_250.0, AxisKind::X)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_labels);
criterion_main!(benches);
