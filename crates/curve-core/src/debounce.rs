// File: crates/curve-core/src/debounce.rs
// Summary: Trailing-edge debouncer; bursts of notifications collapse into one deferred action.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{trace, warn};

use crate::error::CurveResult;

/// Quiet period used for resize-triggered redraws.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

/// Runs `action` once the notifications have been quiet for `quiet`.
/// At most one run is pending at a time; every notification while one is
/// pending cancels it and schedules a fresh one.
pub struct Debouncer {
    tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new<F>(quiet: Duration, action: F) -> Self
    where
        F: FnMut() -> CurveResult<()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || run(rx, quiet, action));
        Self { tx: Some(tx), worker: Some(worker) }
    }

    /// Schedule the action, replacing any pending run.
    pub fn notify(&self) {
        if let Some(tx) = &self.tx {
            // the worker only exits once `tx` is dropped
            let _ = tx.send(());
        }
    }
}

impl Drop for Debouncer {
    /// Discards a pending run and waits for the worker to exit.
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run<F>(rx: Receiver<()>, quiet: Duration, mut action: F)
where
    F: FnMut() -> CurveResult<()>,
{
    while rx.recv().is_ok() {
        loop {
            match rx.recv_timeout(quiet) {
                Ok(()) => trace!("debounce re-armed"),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
        // a failed run leaves the previous output in place; keep serving notifications
        if let Err(err) = action() {
            warn!(error = %err, "debounced action failed");
        }
    }
}
