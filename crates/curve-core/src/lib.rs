// File: crates/curve-core/src/lib.rs
// Summary: Core library entry point; exports the geometry pipeline and redraw plumbing.

pub mod axis;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod plot;
pub mod scale;
pub mod scene;
pub mod spline;
pub mod telemetry;
pub mod types;

pub use axis::{Anchor, AxisKind, AxisLabel, AxisLabeler};
pub use debounce::{Debouncer, DEFAULT_QUIET};
pub use error::{CurveError, CurveResult};
pub use hover::{marker_at, tooltip_for, HoverChange, HoverState, Tooltip};
pub use plot::Plot;
pub use scale::{project, scale, Projection};
pub use scene::{build_scene, LabelMark, Marker, Scene, Segment};
pub use spline::{build_path, PathCommand, PathDescription, PathMode, ResolvedCommand};
pub use types::{DataPoint, ScaledPoint, Viewport};
