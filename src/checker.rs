//! Fan-out execution of the isolation check.
//!
//! `Checker` spawns one named OS thread per worker, tallies isolation
//! violations on a shared atomic counter, and blocks on a completion barrier
//! until every worker has signalled. The barrier is the report channel
//! itself: each worker sends exactly one report, the checker drops its own
//! sender after the spawn loop, and the drain ends precisely when the last
//! worker's sender is gone.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, trace};

use crate::config::{Capture, CheckConfig};
use crate::error::{CheckError, CheckResult};
use crate::slot::Slot;
use crate::worker::{self, WorkerReport};

/// Outcome of one check run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How many workers the run fanned out to
    pub workers: usize,
    /// Final value of the shared mismatch counter
    pub mismatches: usize,
    /// Wall-clock time from first spawn to completion barrier release
    pub elapsed: Duration,
    /// Per-worker diagnostics, filtered per [`Capture`] mode
    pub reports: Vec<WorkerReport>,
}

impl RunReport {
    /// True when every worker read back exactly what it wrote.
    pub fn is_isolated(&self) -> bool {
        self.mismatches == 0
    }
}

/// Run the isolation check: fan out workers against a [`Slot`] and count
/// how many of them read back a value they did not write.
///
/// # Workflow
///
/// 1. Describe the run with a [`CheckConfig`]
/// 2. Create a `Checker` with [`Checker::new`]
/// 3. Execute with [`Checker::run`] against the slot under test
/// 4. Inspect the returned [`RunReport`]
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use isolocal::{CheckConfig, Checker, ThreadLocalSlot};
///
/// let checker = Checker::new(CheckConfig::new(8, Duration::from_micros(50)));
/// let report = checker.run(&ThreadLocalSlot::new()).unwrap();
///
/// assert!(report.is_isolated());
/// assert_eq!(report.reports.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Execute the configured run against `slot`.
    ///
    /// Blocks until every worker has signalled completion. A non-zero
    /// mismatch count in the report is a result, not an error.
    ///
    /// # Errors
    ///
    /// - [`CheckError::Spawn`] if a worker thread cannot be created
    /// - [`CheckError::WorkerPanicked`] if a worker dies before signalling;
    ///   the run has no recovery path and aborts
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, slot), fields(workers = self.config.workers))
    )]
    pub fn run<S: Slot>(&self, slot: &S) -> CheckResult<RunReport> {
        let workers = self.config.workers;
        let delay = self.config.delay;
        let clear_after_read = self.config.clear_after_read;
        let capture = self.config.capture;

        #[cfg(feature = "tracing")]
        info!(workers, ?delay, "starting isolation check");

        let mismatches = AtomicUsize::new(0);
        let (report_tx, report_rx) = mpsc::channel::<WorkerReport>();
        let started = Instant::now();

        let (elapsed, reports) =
            thread::scope(|scope| -> CheckResult<(Duration, Vec<WorkerReport>)> {
                let mut handles = Vec::with_capacity(workers);

                for ordinal in 1..=workers {
                    let label = format!("worker-{ordinal:05}");
                    let tx = report_tx.clone();
                    let counter = &mismatches;
                    let worker_label = label.clone();

                    #[cfg(feature = "tracing")]
                    trace!(worker = %label, "spawning worker");

                    let handle = thread::Builder::new()
                        .name(label.clone())
                        .spawn_scoped(scope, move || {
                            let report =
                                worker::probe(&worker_label, slot, delay, clear_after_read);
                            if !report.matched {
                                // Relaxed is enough: the tally is only read
                                // after the completion barrier and the joins.
                                counter.fetch_add(1, Ordering::Relaxed);
                            }
                            // The send is also this worker's completion signal.
                            // The receiver only disappears if the run is
                            // already aborting, so a failed send is ignored.
                            let _ = tx.send(report);
                        })
                        .map_err(|source| CheckError::Spawn {
                            label: label.clone(),
                            source,
                        })?;

                    handles.push((label, handle));
                }

                // Dropping our sender means the drain below ends exactly when
                // every worker has signalled: the completion barrier.
                drop(report_tx);

                #[cfg(feature = "tracing")]
                debug!(workers, "all workers spawned, waiting on completion barrier");

                let mut reports = Vec::new();
                for report in report_rx.iter() {
                    if !report.matched {
                        #[cfg(feature = "tracing")]
                        error!(
                            worker = %report.label,
                            before = %report.before,
                            after = report.after.as_deref().unwrap_or("<empty>"),
                            "isolation violated"
                        );
                    }
                    match capture {
                        Capture::All => reports.push(report),
                        Capture::MismatchesOnly if !report.matched => reports.push(report),
                        Capture::MismatchesOnly => {}
                    }
                }
                let elapsed = started.elapsed();

                // Join everything before reporting a panic so no handle is
                // left for the scope to re-raise. Only the first panic is
                // surfaced; the rest carry no extra information.
                let mut first_panic = None;
                for (label, handle) in handles {
                    if let Err(payload) = handle.join() {
                        #[cfg(feature = "tracing")]
                        error!(worker = %label, "worker panicked during its probe");

                        if first_panic.is_none() {
                            first_panic = Some(CheckError::WorkerPanicked {
                                label,
                                panic_message: panic_message(payload),
                            });
                        }
                    }
                }
                if let Some(err) = first_panic {
                    return Err(err);
                }

                Ok((elapsed, reports))
            })?;

        let mismatches = mismatches.load(Ordering::Relaxed);

        #[cfg(feature = "tracing")]
        info!(mismatches, ?elapsed, "isolation check complete");

        Ok(RunReport {
            workers,
            mismatches,
            elapsed,
            reports,
        })
    }
}

// Recover a printable message from a worker's panic payload
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
