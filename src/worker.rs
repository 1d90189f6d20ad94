//! The probe each worker runs, and what it observed.

use std::thread;
use std::time::Duration;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::slot::Slot;
use crate::stamp;

/// One worker's diagnostic record: what it wrote, what it read back, and
/// whether the two agreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// The worker's distinguishing label (also its thread name)
    pub label: String,
    /// The stamp the worker wrote into its slot
    pub before: String,
    /// What the worker read back, `None` if the slot came back empty
    pub after: Option<String>,
    /// `before` and `after` compared equal
    pub matched: bool,
}

impl std::fmt::Display for WorkerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: before={} after={} matched={}",
            self.label,
            self.before,
            self.after.as_deref().unwrap_or("<empty>"),
            self.matched
        )
    }
}

/// Write a fresh stamp, sleep, read it back, compare.
///
/// The sleep is the single intentional suspension point of a worker's life:
/// it opens a window for every other worker to interleave between this
/// worker's write and its read, which is where broken isolation would show.
pub(crate) fn probe<S: Slot>(
    label: &str,
    slot: &S,
    delay: Duration,
    clear_after_read: bool,
) -> WorkerReport {
    let before = stamp::now();
    slot.store(before.clone());

    thread::sleep(delay);

    let after = slot.load();
    if clear_after_read {
        slot.clear();
    }
    let matched = after.as_deref() == Some(before.as_str());

    #[cfg(feature = "tracing")]
    trace!(worker = label, matched, "probe complete");

    WorkerReport {
        label: label.to_string(),
        before,
        after,
        matched,
    }
}

#[cfg(test)]
mod tests;
