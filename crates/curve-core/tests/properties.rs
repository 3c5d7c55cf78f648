// File: crates/curve-core/tests/properties.rs
// Purpose: Property checks for ordering, determinism, control-arm clamp, extremum flatness, label coverage.

use curve_core::scale::sort_by_x;
use curve_core::spline::{control_distance, is_extremum};
use curve_core::{
    build_path, build_scene, project, AxisKind, AxisLabeler, DataPoint, PathMode, ResolvedCommand, ScaledPoint,
    Viewport,
};
use proptest::prelude::*;

fn samples() -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 3..48)
        .prop_map(|raw| raw.into_iter().map(DataPoint::from).collect())
}

/// Scaling needs at least two distinct values on each axis.
fn has_range(data: &[DataPoint]) -> bool {
    let first = data[0];
    data.iter().any(|p| p.x != first.x) && data.iter().any(|p| p.y != first.y)
}

proptest! {
    #[test]
    fn sorted_working_copy_is_non_decreasing(mut data in samples()) {
        sort_by_x(&mut data);
        for pair in data.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn scaled_points_match_dataset_length_and_order(data in samples()) {
        prop_assume!(has_range(&data));
        let projection = project(&data, &Viewport::new(1200.0, 700.0)).unwrap();
        prop_assert_eq!(projection.points.len(), data.len());
        for pair in projection.points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn scene_is_deterministic(data in samples()) {
        prop_assume!(has_range(&data));
        let vp = Viewport::new(1200.0, 700.0);
        let a = build_scene(&data, &vp, PathMode::Smooth).unwrap();
        let b = build_scene(&data, &vp, PathMode::Smooth).unwrap();
        prop_assert_eq!(a.path.to_svg(), b.path.to_svg());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn control_distance_never_exceeds_nearer_neighbor(
        ax in -500.0f64..0.0, bx in 0.0f64..1.0, cx in 1.0f64..500.0,
    ) {
        let a = ScaledPoint::new(ax, 0.0);
        let b = ScaledPoint::new(bx, 0.0);
        let c = ScaledPoint::new(cx, 0.0);
        let min_dist = (a.x - b.x).abs().min((c.x - b.x).abs());
        prop_assert!(control_distance(a, b, c) <= min_dist);
    }

    #[test]
    fn path_endpoints_are_preserved(data in samples()) {
        prop_assume!(has_range(&data));
        let projection = project(&data, &Viewport::new(1200.0, 700.0)).unwrap();
        let path = build_path(&projection.points, PathMode::Smooth).unwrap();
        prop_assert_eq!(path.start(), projection.points.first().copied());
        prop_assert_eq!(path.end(), projection.points.last().copied());
    }

    #[test]
    fn extrema_get_horizontal_control_pairs(data in samples()) {
        prop_assume!(has_range(&data));
        let projection = project(&data, &Viewport::new(1200.0, 700.0)).unwrap();
        let pts = &projection.points;
        let resolved = build_path(pts, PathMode::Smooth).unwrap().resolved();
        for i in 1..pts.len() - 1 {
            if !is_extremum(pts[i - 1], pts[i], pts[i + 1]) {
                continue;
            }
            let (ResolvedCommand::CubicTo { ctrl2, .. }, ResolvedCommand::CubicTo { ctrl1, .. }) =
                (resolved[i], resolved[i + 1])
            else {
                return Err(TestCaseError::fail("interior points are joined by cubics"));
            };
            prop_assert_eq!(ctrl2.y, pts[i].y);
            prop_assert_eq!(ctrl1.y, pts[i].y);
        }
    }

    #[test]
    fn wider_span_never_loses_labels(
        span in 1.0f64..4_000.0, extra in 0.0f64..4_000.0,
        lo in -1_000.0f64..1_000.0, width in 0.5f64..1_000.0,
        font in 6.0f64..32.0,
    ) {
        let labeler = AxisLabeler::new(font);
        for axis in [AxisKind::X, AxisKind::Y] {
            let narrow = labeler.place_labels(0.0, span, lo, lo + width, axis).len();
            let wide = labeler.place_labels(0.0, span + extra, lo, lo + width, axis).len();
            prop_assert!(wide >= narrow);
        }
    }
}
