use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve_core::{build_scene, DataPoint, PathMode, Scene, Viewport};
use curve_render_skia::{RenderOptions, SkiaRenderer};

fn build_scene_xy(n: usize) -> Scene {
    let data: Vec<DataPoint> = (0..n)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect();
    build_scene(&data, &Viewport::new(800.0, 500.0), PathMode::Smooth).expect("bench scene")
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new();
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let scene = build_scene_xy(n);
            let opts = RenderOptions { draw_labels: false, draw_markers: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&scene, &opts, None)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
