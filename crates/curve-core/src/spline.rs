// File: crates/curve-core/src/spline.rs
// Summary: Path synthesis through x-sorted pixel points (smooth cubic spline or polyline).
// Notes:
// - Smooth paths use one explicit cubic segment followed by smooth-continuation
//   segments, so each interior point carries a single control point and the
//   opposite one is its reflection.
// - Local extrema get a horizontal tangent so the curve never overshoots a peak.

use std::fmt::Write as _;

use crate::error::{CurveError, CurveResult};
use crate::geometry::{format_number, symmetric};
use crate::types::ScaledPoint;

/// Weight of the full neighbor span in the control distance.
const SPAN_WEIGHT: f64 = 0.07;
/// Weight of the shorter neighbor segment in the control distance.
const NEAR_WEIGHT: f64 = 0.63;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathMode {
    #[default]
    Smooth,
    Linear,
}

/// Absolute path commands, SVG semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(ScaledPoint),
    LineTo(ScaledPoint),
    CubicTo { ctrl1: ScaledPoint, ctrl2: ScaledPoint, to: ScaledPoint },
    /// First control point is implied: the reflection of the previous
    /// segment's second control point across the current point.
    SmoothCubicTo { ctrl2: ScaledPoint, to: ScaledPoint },
}

impl PathCommand {
    pub fn end_point(&self) -> ScaledPoint {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CubicTo { to, .. } | PathCommand::SmoothCubicTo { to, .. } => to,
        }
    }
}

/// Path commands with every smooth continuation spelled out as a full cubic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedCommand {
    MoveTo(ScaledPoint),
    LineTo(ScaledPoint),
    CubicTo { ctrl1: ScaledPoint, ctrl2: ScaledPoint, to: ScaledPoint },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn start(&self) -> Option<ScaledPoint> {
        self.commands.first().map(PathCommand::end_point)
    }

    pub fn end(&self) -> Option<ScaledPoint> {
        self.commands.last().map(PathCommand::end_point)
    }

    /// SVG `d` attribute text, e.g. `M74,326C...S...`.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 24);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push('M');
                    push_pair(&mut out, p);
                }
                PathCommand::LineTo(p) => {
                    out.push('L');
                    push_pair(&mut out, p);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    out.push('C');
                    push_pair(&mut out, ctrl1);
                    out.push(',');
                    push_pair(&mut out, ctrl2);
                    out.push(',');
                    push_pair(&mut out, to);
                }
                PathCommand::SmoothCubicTo { ctrl2, to } => {
                    out.push('S');
                    push_pair(&mut out, ctrl2);
                    out.push(',');
                    push_pair(&mut out, to);
                }
            }
        }
        out
    }

    /// Replace smooth continuations with explicit cubics, for backends that
    /// have no smooth-curve primitive.
    pub fn resolved(&self) -> Vec<ResolvedCommand> {
        let mut out = Vec::with_capacity(self.commands.len());
        let mut current = ScaledPoint::default();
        let mut last_ctrl2: Option<ScaledPoint> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(ResolvedCommand::MoveTo(p));
                    last_ctrl2 = None;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    out.push(ResolvedCommand::LineTo(p));
                    last_ctrl2 = None;
                    current = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    out.push(ResolvedCommand::CubicTo { ctrl1, ctrl2, to });
                    last_ctrl2 = Some(ctrl2);
                    current = to;
                }
                PathCommand::SmoothCubicTo { ctrl2, to } => {
                    let ctrl1 = last_ctrl2.map_or(current, |c| symmetric(c, current));
                    out.push(ResolvedCommand::CubicTo { ctrl1, ctrl2, to });
                    last_ctrl2 = Some(ctrl2);
                    current = to;
                }
            }
        }
        out
    }
}

fn push_pair(out: &mut String, p: ScaledPoint) {
    let _ = write!(out, "{},{}", format_number(p.x), format_number(p.y));
}

/// Which way a control point leans from its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tangent {
    /// Toward the previous neighbor.
    Backward,
    /// Toward the next neighbor.
    Forward,
    /// Horizontal, toward the previous neighbor.
    Flat,
}

/// Rise over run between `a` and `c`; zero for a vertical pair.
#[inline]
pub fn coefficient(a: ScaledPoint, c: ScaledPoint) -> f64 {
    if a.x != c.x {
        (a.y - c.y) / (a.x - c.x)
    } else {
        0.0
    }
}

/// Length of the control arm at `b`, never longer than the nearer neighbor
/// is far along x.
pub fn control_distance(a: ScaledPoint, b: ScaledPoint, c: ScaledPoint) -> f64 {
    let before = (a.x - b.x).abs();
    let after = (c.x - b.x).abs();
    let min_dist = before.min(after);
    let ctrl = SPAN_WEIGHT * (before + after) + NEAR_WEIGHT * min_dist;
    ctrl.min(min_dist)
}

/// True when `b` is a local minimum or maximum (ties included).
#[inline]
pub fn is_extremum(a: ScaledPoint, b: ScaledPoint, c: ScaledPoint) -> bool {
    (a.y <= b.y && c.y <= b.y) || (a.y >= b.y && c.y >= b.y)
}

/// Control point for anchor `b` between neighbors `a` and `c`. When `a == c`
/// the anchor is an endpoint mirrored onto itself and the slope runs from
/// `a` to `b`.
pub fn control_point(a: ScaledPoint, b: ScaledPoint, c: ScaledPoint, tangent: Tangent) -> ScaledPoint {
    let ctrl = control_distance(a, b, c);
    let slope = match tangent {
        Tangent::Flat => 0.0,
        _ if a == c => coefficient(a, b),
        _ => coefficient(a, c),
    };
    let dx = ctrl / (1.0 + slope * slope).sqrt();
    let dy = dx * slope;
    match tangent {
        Tangent::Forward => ScaledPoint::new(b.x + dx, b.y + dy),
        Tangent::Backward | Tangent::Flat => ScaledPoint::new(b.x - dx, b.y - dy),
    }
}

fn incoming_tangent(a: ScaledPoint, b: ScaledPoint, c: ScaledPoint) -> Tangent {
    if is_extremum(a, b, c) {
        Tangent::Flat
    } else {
        Tangent::Backward
    }
}

/// Build a path through `points`, which must already be sorted by x.
/// Two points always produce a straight segment.
pub fn build_path(points: &[ScaledPoint], mode: PathMode) -> CurveResult<PathDescription> {
    let n = points.len();
    if n < 2 {
        return Err(CurveError::InsufficientPointsForSpline { found: n });
    }

    let mut commands = Vec::with_capacity(n);
    commands.push(PathCommand::MoveTo(points[0]));

    if mode == PathMode::Linear || n == 2 {
        commands.extend(points[1..].iter().copied().map(PathCommand::LineTo));
        return Ok(PathDescription { commands });
    }

    let d = points;
    // The first anchor has no left neighbor; mirror the second point across it.
    let mirrored = symmetric(d[1], d[0]);
    commands.push(PathCommand::CubicTo {
        ctrl1: control_point(mirrored, d[0], d[1], Tangent::Forward),
        ctrl2: control_point(d[0], d[1], d[2], incoming_tangent(d[0], d[1], d[2])),
        to: d[1],
    });

    for i in 2..n - 1 {
        let tangent = incoming_tangent(d[i - 1], d[i], d[i + 1]);
        commands.push(PathCommand::SmoothCubicTo {
            ctrl2: control_point(d[i - 1], d[i], d[i + 1], tangent),
            to: d[i],
        });
    }

    let last = n - 1;
    commands.push(PathCommand::SmoothCubicTo {
        ctrl2: control_point(d[last - 1], d[last], d[last - 1], Tangent::Backward),
        to: d[last],
    });

    Ok(PathDescription { commands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> ScaledPoint {
        ScaledPoint::new(x, y)
    }

    #[test]
    fn control_distance_blends_and_clamps() {
        // 0.07 * 30 + 0.63 * 10 = 8.4
        assert_relative_eq!(control_distance(p(0.0, 0.0), p(10.0, 0.0), p(30.0, 0.0)), 8.4, epsilon = 1e-9);
        // 0.07 * 1010 + 0.63 * 10 = 77.0, clamped to 10
        assert_eq!(control_distance(p(0.0, 0.0), p(10.0, 0.0), p(1010.0, 0.0)), 10.0);
    }

    #[test]
    fn coefficient_of_vertical_pair_is_zero() {
        assert_eq!(coefficient(p(3.0, 1.0), p(3.0, 9.0)), 0.0);
        assert_eq!(coefficient(p(0.0, 0.0), p(2.0, 4.0)), 2.0);
    }

    #[test]
    fn extremum_detection_includes_ties() {
        assert!(is_extremum(p(0.0, 5.0), p(1.0, 1.0), p(2.0, 3.0)));
        assert!(is_extremum(p(0.0, 1.0), p(1.0, 5.0), p(2.0, 3.0)));
        assert!(is_extremum(p(0.0, 1.0), p(1.0, 1.0), p(2.0, 3.0)));
        assert!(!is_extremum(p(0.0, 1.0), p(1.0, 2.0), p(2.0, 3.0)));
    }

    #[test]
    fn control_point_follows_neighbor_slope() {
        // slope of a->c is 1, ctrl = 0.07 * 20 + 0.63 * 10 = 7.7
        let cp = control_point(p(0.0, 0.0), p(10.0, 10.0), p(20.0, 20.0), Tangent::Backward);
        let arm = 7.7 / 2f64.sqrt();
        assert_relative_eq!(cp.x, 10.0 - arm, epsilon = 1e-9);
        assert_relative_eq!(cp.y, 10.0 - arm, epsilon = 1e-9);
        let fwd = control_point(p(0.0, 0.0), p(10.0, 10.0), p(20.0, 20.0), Tangent::Forward);
        assert_relative_eq!(fwd.x, 10.0 + arm, epsilon = 1e-9);
    }

    #[test]
    fn flat_control_point_is_horizontal() {
        let cp = control_point(p(0.0, 50.0), p(10.0, 0.0), p(20.0, 40.0), Tangent::Flat);
        assert_eq!(cp.y, 0.0);
        assert_relative_eq!(cp.x, 10.0 - 7.7, epsilon = 1e-9);
    }

    #[test]
    fn linear_mode_is_a_polyline() {
        let pts = [p(0.0, 0.0), p(5.0, 3.0), p(9.0, 1.0)];
        let path = build_path(&pts, PathMode::Linear).unwrap();
        assert_eq!(path.to_svg(), "M0,0L5,3L9,1");
    }

    #[test]
    fn single_point_is_rejected() {
        assert_eq!(
            build_path(&[p(1.0, 1.0)], PathMode::Smooth),
            Err(CurveError::InsufficientPointsForSpline { found: 1 })
        );
    }

    #[test]
    fn smooth_path_uses_one_cubic_then_continuations() {
        let pts = [p(0.0, 100.0), p(10.0, 50.0), p(20.0, 80.0), p(30.0, 10.0)];
        let path = build_path(&pts, PathMode::Smooth).unwrap();
        let kinds: Vec<_> = path
            .commands()
            .iter()
            .map(|c| match c {
                PathCommand::MoveTo(_) => 'M',
                PathCommand::LineTo(_) => 'L',
                PathCommand::CubicTo { .. } => 'C',
                PathCommand::SmoothCubicTo { .. } => 'S',
            })
            .collect();
        assert_eq!(kinds, vec!['M', 'C', 'S', 'S']);
        assert!(path.to_svg().starts_with("M0,100C"));
    }

    #[test]
    fn closing_segment_mirrors_last_neighbor() {
        let pts = [p(0.0, 0.0), p(10.0, 10.0), p(20.0, 0.0)];
        let path = build_path(&pts, PathMode::Smooth).unwrap();
        let PathCommand::SmoothCubicTo { ctrl2, to } = path.commands()[2] else {
            panic!("expected smooth closing segment");
        };
        assert_eq!(to, p(20.0, 0.0));
        // slope from (10,10) to (20,0) is -1, ctrl = 0.07 * 20 + 0.63 * 10
        let arm = 7.7 / 2f64.sqrt();
        assert_relative_eq!(ctrl2.x, 20.0 - arm, epsilon = 1e-9);
        assert_relative_eq!(ctrl2.y, arm, epsilon = 1e-9);
    }

    #[test]
    fn resolved_reflects_previous_control_point() {
        let pts = [p(0.0, 0.0), p(10.0, 10.0), p(20.0, 0.0), p(30.0, 10.0)];
        let path = build_path(&pts, PathMode::Smooth).unwrap();
        let resolved = path.resolved();
        let (ResolvedCommand::CubicTo { ctrl2: prev, to: anchor, .. }, ResolvedCommand::CubicTo { ctrl1, .. }) =
            (resolved[1], resolved[2])
        else {
            panic!("expected cubic segments");
        };
        assert_eq!(ctrl1, symmetric(prev, anchor));
    }
}
