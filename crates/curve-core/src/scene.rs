// File: crates/curve-core/src/scene.rs
// Summary: Assembles pipeline outputs into a renderer-agnostic scene (path, markers, guides, labels).

use std::fmt::Write as _;

use tracing::trace;

use crate::axis::{Anchor, AxisKind, AxisLabel, AxisLabeler};
use crate::error::CurveResult;
use crate::geometry::format_number;
use crate::scale::{project, Projection};
use crate::spline::{build_path, PathDescription, PathMode};
use crate::types::{DataPoint, ScaledPoint, Viewport, MARKER_RADIUS};

/// Gap between the bottom margin edge and the x label baseline.
const X_LABEL_DROP: f64 = 10.0;
/// Gap between the y guide line and the right edge of y labels.
const Y_LABEL_INSET: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: ScaledPoint,
    pub to: ScaledPoint,
}

impl Segment {
    pub const fn new(from: ScaledPoint, to: ScaledPoint) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: ScaledPoint,
    pub radius: f64,
}

/// A label with where its text goes and its short tick mark.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelMark {
    pub axis: AxisKind,
    pub label: AxisLabel,
    pub text: String,
    pub origin: ScaledPoint,
    pub tick: Segment,
}

/// Everything a rendering collaborator needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub font_family: String,
    pub projection: Projection,
    /// Stroked, never filled.
    pub path: PathDescription,
    pub markers: Vec<Marker>,
    pub x_guide: Segment,
    pub y_guide: Segment,
    pub labels: Vec<LabelMark>,
}

/// Run the whole pipeline: scale, build the path, place labels on both axes.
pub fn build_scene(dataset: &[DataPoint], viewport: &Viewport, mode: PathMode) -> CurveResult<Scene> {
    let projection = project(dataset, viewport)?;
    let path = build_path(&projection.points, mode)?;

    let m = viewport.margin;
    let lm = projection.left_margin;
    let fs = viewport.font_size;
    let (w, h) = (viewport.width, viewport.height);
    let axis_left = m + lm;
    let axis_bottom = h - m - fs;

    let markers = projection
        .points
        .iter()
        .map(|&center| Marker { center, radius: MARKER_RADIUS })
        .collect();

    let labeler = AxisLabeler::new(fs);
    let mut labels = Vec::new();

    let (first, last) = projection.x_endpoints();
    let x_row = h - m + X_LABEL_DROP;
    for label in labeler.place_labels(first.pixel, last.pixel, first.value, last.value, AxisKind::X) {
        let origin = ScaledPoint::new(label.pixel_position, x_row);
        labels.push(mark(AxisKind::X, label, origin, fs));
    }

    let (low, high) = projection.y_endpoints();
    let y_column = axis_left - Y_LABEL_INSET;
    for label in labeler.place_labels(low.pixel, high.pixel, low.value, high.value, AxisKind::Y) {
        let origin = ScaledPoint::new(y_column, label.pixel_position);
        labels.push(mark(AxisKind::Y, label, origin, fs));
    }
    trace!(labels = labels.len(), commands = path.len(), "scene assembled");

    Ok(Scene {
        width: w,
        height: h,
        font_size: fs,
        font_family: viewport.font_family.clone(),
        projection,
        path,
        markers,
        x_guide: Segment::new(ScaledPoint::new(axis_left, axis_bottom), ScaledPoint::new(w - m, axis_bottom)),
        y_guide: Segment::new(ScaledPoint::new(axis_left, m), ScaledPoint::new(axis_left, axis_bottom)),
        labels,
    })
}

fn mark(axis: AxisKind, label: AxisLabel, origin: ScaledPoint, font_size: f64) -> LabelMark {
    let tick = match label.anchor {
        Anchor::Middle => Segment::new(
            ScaledPoint::new(origin.x, origin.y - font_size - 6.0),
            ScaledPoint::new(origin.x, origin.y - font_size - 14.0),
        ),
        Anchor::End | Anchor::Start => Segment::new(
            ScaledPoint::new(origin.x + 6.0, origin.y),
            ScaledPoint::new(origin.x + 14.0, origin.y),
        ),
    };
    LabelMark { axis, label, text: format_number(label.value), origin, tick }
}

impl Scene {
    pub fn labels_on(&self, axis: AxisKind) -> impl Iterator<Item = &LabelMark> {
        self.labels.iter().filter(move |l| l.axis == axis)
    }

    /// Standalone SVG document for the scene.
    pub fn to_svg_document(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = format_number(self.width),
            h = format_number(self.height),
        );
        let _ = writeln!(out, r#"  <path d="{}" fill="none" stroke="black"/>"#, self.path.to_svg());
        for guide in [self.x_guide, self.y_guide] {
            push_line(&mut out, guide);
        }
        out.push_str("  <g id=\"points\">\n");
        for m in &self.markers {
            let _ = writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="white" stroke="black"/>"#,
                format_number(m.center.x),
                format_number(m.center.y),
                format_number(m.radius),
            );
        }
        out.push_str("  </g>\n");
        for l in &self.labels {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" fill="black" font-size="{}px" font-family="{}" text-anchor="{}" baseline-shift="-0.5ex">{}</text>"#,
                format_number(l.origin.x),
                format_number(l.origin.y),
                format_number(self.font_size),
                escape(&self.font_family),
                l.label.anchor.as_str(),
                escape(&l.text),
            );
            push_line(&mut out, l.tick);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn push_line(out: &mut String, s: Segment) {
    let _ = writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="gray"/>"#,
        format_number(s.from.x),
        format_number(s.from.y),
        format_number(s.to.x),
        format_number(s.to.y),
    );
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
