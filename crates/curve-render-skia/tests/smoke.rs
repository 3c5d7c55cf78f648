// File: crates/curve-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use curve_core::{build_scene, DataPoint, PathMode, Viewport};
use curve_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    // Minimal data: unordered samples with a peak and a trough
    let data = vec![
        DataPoint::new(4.0, 2.5),
        DataPoint::new(0.0, 0.0),
        DataPoint::new(2.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(3.0, 3.5),
    ];
    let scene = build_scene(&data, &Viewport::new(640.0, 400.0), PathMode::Smooth).expect("scene");

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    renderer.render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works, with a tooltip on top
    let tip = curve_core::tooltip_for(&scene.projection, 2).expect("tooltip");
    let bytes = renderer.render_to_png_bytes(&scene, &opts, Some(&tip)).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
