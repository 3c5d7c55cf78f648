// File: crates/curve-core/src/axis.rs
// Summary: Tick label placement by recursive bisection of the axis pixel span.

use std::fmt;

use crate::geometry::{magnitude, middle, round_tenth};

/// Horizontal labels reserve this many font sizes per estimated character.
const X_SPACING_FACTOR: f64 = 1.5;
/// Vertical labels need this many font sizes between them.
const Y_SPACING_FONT_SIZES: f64 = 6.0;
/// Narrowest label estimate, in characters.
const MIN_LABEL_CHARS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisKind::X => "x",
            AxisKind::Y => "y",
        })
    }
}

/// Text alignment relative to the label's pixel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// SVG `text-anchor` keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabel {
    /// Position along the axis, in pixels.
    pub pixel_position: f64,
    pub value: f64,
    pub anchor: Anchor,
}

impl AxisKind {
    pub fn anchor(&self) -> Anchor {
        match self {
            AxisKind::X => Anchor::Middle,
            AxisKind::Y => Anchor::End,
        }
    }
}

/// Estimated character count of the wider of two labels, floored at 4.
pub fn label_width(a: f64, b: f64) -> usize {
    magnitude(round_tenth(a)).max(magnitude(round_tenth(b))).max(MIN_LABEL_CHARS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabeler {
    pub font_size: f64,
}

impl AxisLabeler {
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }

    /// Minimum pixel gap that leaves room for one more label.
    pub fn threshold(&self, axis: AxisKind, min_value: f64, max_value: f64) -> f64 {
        match axis {
            AxisKind::X => label_width(min_value, max_value) as f64 * self.font_size * X_SPACING_FACTOR,
            AxisKind::Y => self.font_size * Y_SPACING_FONT_SIZES,
        }
    }

    /// Labels for one axis: the two endpoints, then every bisection point
    /// whose parent interval was at least one threshold wide. Order beyond
    /// the leading endpoints is unspecified.
    pub fn place_labels(
        &self,
        min_pixel: f64,
        max_pixel: f64,
        min_value: f64,
        max_value: f64,
        axis: AxisKind,
    ) -> Vec<AxisLabel> {
        let anchor = axis.anchor();
        let mut out = vec![
            AxisLabel { pixel_position: min_pixel, value: min_value, anchor },
            AxisLabel { pixel_position: max_pixel, value: max_value, anchor },
        ];
        let threshold = self.threshold(axis, min_value, max_value);
        // a zero threshold or a non-finite span would never stop halving
        if threshold.is_finite() && threshold > 0.0 && min_pixel.is_finite() && max_pixel.is_finite() {
            bisect(min_pixel, max_pixel, min_value, max_value, threshold, anchor, &mut out);
        }
        out
    }
}

fn bisect(a: f64, b: f64, av: f64, bv: f64, threshold: f64, anchor: Anchor, out: &mut Vec<AxisLabel>) {
    if (a - b).abs() < threshold {
        return;
    }
    let c = middle(a, b);
    let cv = middle(av, bv);
    out.push(AxisLabel { pixel_position: c, value: round_tenth(cv), anchor });
    bisect(a, c, av, cv, threshold, anchor, out);
    bisect(c, b, cv, bv, threshold, anchor, out);
}
