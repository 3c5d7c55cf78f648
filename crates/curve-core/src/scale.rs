// File: crates/curve-core/src/scale.rs
// Summary: Data-to-pixel normalization: sort, per-axis linear scale, vertical flip and margin offset.

use tracing::debug;

use crate::axis::AxisKind;
use crate::error::{CurveError, CurveResult};
use crate::types::{DataPoint, Extents, ScaledPoint, Viewport};

/// Everything the Scaler derives in one pass. `data` and `points` share
/// index and order.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// Working copy of the dataset, sorted ascending by x.
    pub data: Vec<DataPoint>,
    pub points: Vec<ScaledPoint>,
    pub extents: Extents,
    pub left_margin: f64,
    pub simple_margin: f64,
}

/// Pixel position paired with the data value it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchored {
    pub pixel: f64,
    pub value: f64,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Horizontal pixel/value pairs of the first and last sample.
    pub fn x_endpoints(&self) -> (Anchored, Anchored) {
        let n = self.points.len() - 1;
        (
            Anchored { pixel: self.points[0].x, value: self.data[0].x },
            Anchored { pixel: self.points[n].x, value: self.data[n].x },
        )
    }

    /// Vertical pixel/value pairs of the lowest and highest sample; the first
    /// occurrence wins on ties.
    pub fn y_endpoints(&self) -> (Anchored, Anchored) {
        let mut lo = 0;
        let mut hi = 0;
        for (i, p) in self.data.iter().enumerate() {
            if p.y < self.data[lo].y {
                lo = i;
            }
            if p.y > self.data[hi].y {
                hi = i;
            }
        }
        (
            Anchored { pixel: self.points[lo].y, value: self.data[lo].y },
            Anchored { pixel: self.points[hi].y, value: self.data[hi].y },
        )
    }
}

/// Sort ascending by x. Stable: points with equal x keep their input order.
pub fn sort_by_x(data: &mut [DataPoint]) {
    data.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Map a dataset into the viewport's plot area.
pub fn scale(dataset: &[DataPoint], viewport: &Viewport) -> CurveResult<Vec<ScaledPoint>> {
    project(dataset, viewport).map(|p| p.points)
}

/// Like [`scale`], but keeps the sorted data, extrema and margins around for
/// path and label construction.
pub fn project(dataset: &[DataPoint], viewport: &Viewport) -> CurveResult<Projection> {
    if dataset.is_empty() {
        return Err(CurveError::EmptyDataset);
    }
    if let Some(index) = dataset.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(CurveError::NonFiniteValue { index });
    }

    let mut data = dataset.to_vec();
    sort_by_x(&mut data);

    let extents = Extents::of(&data).ok_or(CurveError::EmptyDataset)?;
    let simple_margin = viewport.simple_margin();
    let left_margin = viewport.left_margin(extents.max_y);

    let source_width = extents.max_x - extents.min_x;
    let source_height = extents.max_y - extents.min_y;
    if source_width == 0.0 {
        return Err(CurveError::DegenerateRange { axis: AxisKind::X });
    }
    if source_height == 0.0 {
        return Err(CurveError::DegenerateRange { axis: AxisKind::Y });
    }
    if !source_width.is_finite() {
        return Err(CurveError::RangeOverflow { axis: AxisKind::X });
    }
    if !source_height.is_finite() {
        return Err(CurveError::RangeOverflow { axis: AxisKind::Y });
    }

    let dest_width = viewport.width - 2.0 * simple_margin - left_margin;
    let dest_height = viewport.height - 2.0 * simple_margin - viewport.font_size;
    if !(dest_width > 0.0 && dest_height > 0.0) {
        return Err(CurveError::ViewportTooSmall { width: viewport.width, height: viewport.height });
    }

    let xcoeff = dest_width / source_width;
    let ycoeff = dest_height / source_height;
    // a subnormal span can still blow the coefficient up
    if !xcoeff.is_finite() {
        return Err(CurveError::RangeOverflow { axis: AxisKind::X });
    }
    if !ycoeff.is_finite() {
        return Err(CurveError::RangeOverflow { axis: AxisKind::Y });
    }
    debug!(points = data.len(), xcoeff, ycoeff, left_margin, "scaling dataset");

    let points = data
        .iter()
        .map(|p| {
            let x = ((p.x - extents.min_x) * xcoeff).ceil();
            let y = ((p.y - extents.min_y) * ycoeff).ceil();
            // screen y grows downward
            ScaledPoint::new(
                x + simple_margin + left_margin,
                viewport.height - y - simple_margin - viewport.font_size,
            )
        })
        .collect();

    Ok(Projection { data, points, extents, left_margin, simple_margin })
}
