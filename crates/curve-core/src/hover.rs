// File: crates/curve-core/src/hover.rs
// Summary: Pointer hover over point markers: active-marker state, tooltip payload, hit testing.

use crate::geometry::{distance_sq, format_number};
use crate::scale::Projection;
use crate::types::{ScaledPoint, MARKER_RADIUS};

/// Tooltip offset from the marker center, up and to the right.
const TOOLTIP_OFFSET: f64 = MARKER_RADIUS + 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub lines: Vec<String>,
}

/// What the collaborator should do after a pointer notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Show(usize),
    Hide(usize),
    Unchanged,
}

/// Which marker, if any, the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    active: Option<usize>,
}

impl HoverState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn pointer_enter(&mut self, index: usize) -> HoverChange {
        if self.active == Some(index) {
            return HoverChange::Unchanged;
        }
        self.active = Some(index);
        HoverChange::Show(index)
    }

    /// Leaving a marker that is not the active one is ignored.
    pub fn pointer_leave(&mut self, index: usize) -> HoverChange {
        if self.active != Some(index) {
            return HoverChange::Unchanged;
        }
        self.active = None;
        HoverChange::Hide(index)
    }

    /// Forget the active marker, e.g. after the dataset was replaced.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

/// Tooltip for the marker at `index` of a projection.
pub fn tooltip_for(projection: &Projection, index: usize) -> Option<Tooltip> {
    let center = projection.points.get(index)?;
    let sample = projection.data.get(index)?;
    Some(Tooltip {
        anchor_x: center.x + TOOLTIP_OFFSET,
        anchor_y: center.y - TOOLTIP_OFFSET,
        lines: vec![
            format!("x: {}", format_number(sample.x)),
            format!("y: {}", format_number(sample.y)),
        ],
    })
}

/// Index of the nearest marker whose circle contains the cursor.
pub fn marker_at(points: &[ScaledPoint], cursor_x: f64, cursor_y: f64) -> Option<usize> {
    let cursor = ScaledPoint::new(cursor_x, cursor_y);
    let limit = MARKER_RADIUS * MARKER_RADIUS;
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, distance_sq(p, cursor)))
        .filter(|&(_, d)| d <= limit)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
