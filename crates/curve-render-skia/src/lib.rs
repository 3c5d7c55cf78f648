// File: crates/curve-render-skia/src/lib.rs
// Summary: Skia raster renderer; draws a curve-core Scene (path, markers, guides, labels, tooltip).

pub mod text;
pub mod theme;

use std::io::Cursor;

use anyhow::{Context, Result};
use curve_core::{PathDescription, ResolvedCommand, Scene, Segment, Tooltip};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;
pub use theme::Theme;

/// Inner spacing of the tooltip box.
const TOOLTIP_PADDING: f32 = 6.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub draw_markers: bool,
    pub curve_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, draw_markers: true, curve_width: 1.5 }
    }
}

/// Convert a path description into a Skia path, expanding smooth continuations.
pub fn to_skia_path(path: &PathDescription) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.resolved() {
        match cmd {
            ResolvedCommand::MoveTo(p) => {
                out.move_to((p.x as f32, p.y as f32));
            }
            ResolvedCommand::LineTo(p) => {
                out.line_to((p.x as f32, p.y as f32));
            }
            ResolvedCommand::CubicTo { ctrl1, ctrl2, to } => {
                out.cubic_to(
                    (ctrl1.x as f32, ctrl1.y as f32),
                    (ctrl2.x as f32, ctrl2.y as f32),
                    (to.x as f32, to.y as f32),
                );
            }
        }
    }
    out
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Render to tightly packed, unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        tooltip: Option<&Tooltip>,
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let w = scene.width.round().max(1.0) as i32;
        let h = scene.height.round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), scene, opts, tooltip);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} surface failed");
        }
        debug!(width = w, height = h, "rendered scene");
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions, tooltip: Option<&Tooltip>) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(scene, opts, tooltip)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).context("pixel buffer does not match surface size")?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, opts, None)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Paint the scene onto any canvas.
    pub fn draw(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions, tooltip: Option<&Tooltip>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.curve_width);
        stroke.set_color(theme.curve_stroke);
        canvas.draw_path(&to_skia_path(&scene.path), &stroke);

        if opts.draw_markers {
            draw_markers(canvas, scene, theme);
        }

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        axis_paint.set_color(theme.axis_line);
        draw_segment(canvas, scene.x_guide, &axis_paint);
        draw_segment(canvas, scene.y_guide, &axis_paint);

        if opts.draw_labels {
            self.draw_labels(canvas, scene, theme);
        }

        if let Some(tip) = tooltip {
            self.draw_tooltip(canvas, scene, theme, tip);
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
        let mut tick = skia::Paint::default();
        tick.set_anti_alias(true);
        tick.set_stroke_width(1.0);
        tick.set_color(theme.tick);
        let size = scene.font_size as f32;
        for mark in &scene.labels {
            self.text.draw_anchored(
                canvas,
                &mark.text,
                mark.origin.x as f32,
                mark.origin.y as f32,
                size,
                theme.axis_label,
                &scene.font_family,
                mark.label.anchor,
            );
            draw_segment(canvas, mark.tick, &tick);
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, scene: &Scene, theme: &Theme, tip: &Tooltip) {
        let size = scene.font_size as f32;
        let line_height = size * 1.3;
        let text_width = tip
            .lines
            .iter()
            .map(|l| self.text.measure_width(l, size, &scene.font_family))
            .fold(0.0f32, f32::max);
        let left = tip.anchor_x as f32;
        let bottom = tip.anchor_y as f32;
        let top = bottom - line_height * tip.lines.len() as f32 - 2.0 * TOOLTIP_PADDING;
        let rect = skia::Rect::from_ltrb(left, top, left + text_width + 2.0 * TOOLTIP_PADDING, bottom);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.tooltip_fill);
        canvas.draw_rect(rect, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.tooltip_border);
        canvas.draw_rect(rect, &border);

        for (i, line) in tip.lines.iter().enumerate() {
            let y = top + TOOLTIP_PADDING + line_height * (i as f32 + 0.5);
            self.text.draw_anchored(
                canvas,
                line,
                left + TOOLTIP_PADDING,
                y,
                size,
                theme.tooltip_text,
                &scene.font_family,
                curve_core::Anchor::Start,
            );
        }
    }
}

fn draw_markers(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(1.0);
    ring.set_color(theme.marker_stroke);

    for m in &scene.markers {
        let center = (m.center.x as f32, m.center.y as f32);
        canvas.draw_circle(center, m.radius as f32, &fill);
        canvas.draw_circle(center, m.radius as f32, &ring);
    }
}

fn draw_segment(canvas: &skia::Canvas, s: Segment, paint: &skia::Paint) {
    canvas.draw_line((s.from.x as f32, s.from.y as f32), (s.to.x as f32, s.to.y as f32), paint);
}
