// File: crates/curve-core/src/plot.rs
// Summary: Redraw session; dataset and viewport behind one lock, redraw as read-compute-replace.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::debounce::Debouncer;
use crate::error::CurveResult;
use crate::hover::{tooltip_for, Tooltip};
use crate::scene::{build_scene, Scene};
use crate::spline::PathMode;
use crate::types::{DataPoint, Viewport};

struct PlotState {
    data: Vec<DataPoint>,
    viewport: Viewport,
    mode: PathMode,
    scene: Option<Arc<Scene>>,
}

/// A dataset drawn into a resizable surface. Share it behind an `Arc` when
/// redraws can be requested from more than one thread.
pub struct Plot {
    state: Mutex<PlotState>,
}

impl Plot {
    pub fn new(data: Vec<DataPoint>, viewport: Viewport, mode: PathMode) -> Self {
        Self { state: Mutex::new(PlotState { data, viewport, mode, scene: None }) }
    }

    fn lock(&self) -> MutexGuard<'_, PlotState> {
        // state is only replaced wholesale, so a poisoned guard is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_data(&self, data: Vec<DataPoint>) {
        self.lock().data = data;
    }

    pub fn set_mode(&self, mode: PathMode) {
        self.lock().mode = mode;
    }

    /// Track a new container size. Takes effect on the next redraw.
    pub fn resize(&self, width: f64, height: f64) {
        let mut state = self.lock();
        state.viewport.width = width;
        state.viewport.height = height;
    }

    pub fn viewport(&self) -> Viewport {
        self.lock().viewport.clone()
    }

    /// Recompute the scene from the current inputs. On failure the previous
    /// scene stays current and the error is returned.
    pub fn redraw(&self) -> CurveResult<Arc<Scene>> {
        let mut state = self.lock();
        match build_scene(&state.data, &state.viewport, state.mode) {
            Ok(scene) => {
                debug!(width = scene.width, height = scene.height, points = scene.markers.len(), "redraw");
                let scene = Arc::new(scene);
                state.scene = Some(Arc::clone(&scene));
                Ok(scene)
            }
            Err(err) => {
                warn!(error = %err, kept_previous = state.scene.is_some(), "redraw failed");
                Err(err)
            }
        }
    }

    /// Most recent successful scene.
    pub fn last_scene(&self) -> Option<Arc<Scene>> {
        self.lock().scene.clone()
    }

    /// Tooltip for a marker of the last successful scene.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let scene = self.last_scene()?;
        tooltip_for(&scene.projection, index)
    }

    /// Debouncer whose trailing action redraws this plot.
    pub fn debounced_redraw(plot: &Arc<Plot>, quiet: Duration) -> Debouncer {
        let plot = Arc::clone(plot);
        Debouncer::new(quiet, move || plot.redraw().map(|_| ()))
    }
}
