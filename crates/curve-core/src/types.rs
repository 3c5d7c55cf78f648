// File: crates/curve-core/src/types.rs
// Summary: Shared types and constants (samples, pixel points, viewport configuration).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 640.0;
/// Radius of the circle drawn at each data point, in pixels.
pub const MARKER_RADIUS: f64 = 5.0;

/// Domain-space sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Pixel-space point; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

impl ScaledPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis extrema of a dataset, gathered in one scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extents {
    /// Returns `None` for an empty slice.
    pub fn of(data: &[DataPoint]) -> Option<Self> {
        let first = data.first()?;
        let mut e = Self { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for p in &data[1..] {
            e.min_x = e.min_x.min(p.x);
            e.max_x = e.max_x.max(p.x);
            e.min_y = e.min_y.min(p.y);
            e.max_y = e.max_y.max(p.y);
        }
        Some(e)
    }
}

/// Drawing surface dimensions and presentation constants.
/// Contract: `width`/`height` track the container size; the margins and
/// font size are non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Outer spacing.
    pub margin: f64,
    /// Spacing between the margin and the plot area.
    pub inner_margin: f64,
    /// Label text size in px.
    pub font_size: f64,
    pub font_family: String,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_inner_margin(mut self, inner_margin: f64) -> Self {
        self.inner_margin = inner_margin;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Top and right spacing: `margin + inner_margin`.
    pub fn simple_margin(&self) -> f64 {
        self.margin + self.inner_margin
    }

    /// Horizontal room reserved for the widest y label.
    pub fn left_margin(&self, max_y: f64) -> f64 {
        crate::geometry::magnitude(max_y) as f64 * self.font_size
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: 40.0,
            inner_margin: 20.0,
            font_size: 14.0,
            font_family: "Arial".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_single_scan() {
        let data = [DataPoint::new(3.0, -1.0), DataPoint::new(-2.0, 4.0), DataPoint::new(1.0, 0.5)];
        let e = Extents::of(&data).unwrap();
        assert_eq!(e, Extents { min_x: -2.0, max_x: 3.0, min_y: -1.0, max_y: 4.0 });
        assert!(Extents::of(&[]).is_none());
    }

    #[test]
    fn viewport_defaults_and_derived_margins() {
        let vp = Viewport::new(800.0, 400.0);
        assert_eq!(vp.margin, 40.0);
        assert_eq!(vp.inner_margin, 20.0);
        assert_eq!(vp.font_size, 14.0);
        assert_eq!(vp.font_family, "Arial");
        assert_eq!(vp.simple_margin(), 60.0);
        assert_eq!(vp.left_margin(8.0), 14.0);
        assert_eq!(vp.left_margin(1250.5), 6.0 * 14.0);
        // "1e+21"
        assert_eq!(vp.left_margin(1e21), 5.0 * 14.0);
    }

    #[test]
    fn viewport_partial_json_uses_defaults() {
        let vp: Viewport = serde_json::from_str(r#"{"width": 500, "font_size": 10}"#).unwrap();
        assert_eq!(vp.width, 500.0);
        assert_eq!(vp.height, HEIGHT);
        assert_eq!(vp.font_size, 10.0);
        assert_eq!(vp.margin, 40.0);
    }
}
