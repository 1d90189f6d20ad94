//! Run parameters for the checker.
//!
//! A [`CheckConfig`] is built with [`CheckConfig::new`] and refined with
//! chainable setters; the demo programs compile their parameters in as
//! constants (there is deliberately no CLI surface).

use std::time::Duration;

/// Which worker reports a run retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    /// Keep every worker's report
    #[default]
    All,
    /// Keep only reports that violated isolation.
    ///
    /// Bounds memory on large fan-outs; the mismatch tally itself is
    /// unaffected by the capture mode.
    MismatchesOnly,
}

/// Parameters of one check run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use isolocal::{Capture, CheckConfig};
///
/// let config = CheckConfig::new(10_000, Duration::from_micros(100))
///     .clear_after_read(true)
///     .capture(Capture::MismatchesOnly);
/// # let _ = config;
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub(crate) workers: usize,
    pub(crate) delay: Duration,
    pub(crate) clear_after_read: bool,
    pub(crate) capture: Capture,
}

impl CheckConfig {
    /// A run of `workers` concurrent workers, each sleeping `delay` between
    /// its write and its read-back.
    pub fn new(workers: usize, delay: Duration) -> Self {
        Self {
            workers,
            delay,
            clear_after_read: false,
            capture: Capture::All,
        }
    }

    /// Have each worker drop its slot entry after reading it back.
    ///
    /// Irrelevant to the isolation check itself; it models the cleanup that
    /// keeps long-lived tables from accumulating entries for dead workers.
    /// Off by default.
    pub fn clear_after_read(mut self, clear: bool) -> Self {
        self.clear_after_read = clear;
        self
    }

    /// Choose which reports the run retains. Defaults to [`Capture::All`].
    pub fn capture(mut self, capture: Capture) -> Self {
        self.capture = capture;
        self
    }

    /// Worker count this config fans out to.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Per-worker delay between write and read-back.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
