//! Unit tests for worker module

use std::time::Duration;

use crate::slot::{Slot, ThreadLocalSlot};
use crate::worker::probe;

// A slot that hands back a value no worker ever wrote
struct ForeignSlot;

impl Slot for ForeignSlot {
    fn store(&self, _value: String) {}

    fn load(&self) -> Option<String> {
        Some("a foreign value".to_string())
    }

    fn clear(&self) {}
}

// A slot that loses every write
struct AmnesiacSlot;

impl Slot for AmnesiacSlot {
    fn store(&self, _value: String) {}

    fn load(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}

#[test]
fn test_probe_matches_on_isolated_slot() {
    let slot = ThreadLocalSlot::new();
    let report = probe("worker-00001", &slot, Duration::ZERO, false);

    assert!(report.matched);
    assert_eq!(report.label, "worker-00001");
    assert_eq!(report.after.as_deref(), Some(report.before.as_str()));
}

#[test]
fn test_probe_detects_foreign_value() {
    let report = probe("worker-00002", &ForeignSlot, Duration::ZERO, false);

    assert!(!report.matched);
    assert_eq!(report.after.as_deref(), Some("a foreign value"));
    assert_ne!(report.before, "a foreign value");
}

#[test]
fn test_probe_detects_lost_value() {
    let report = probe("worker-00003", &AmnesiacSlot, Duration::ZERO, false);

    assert!(!report.matched);
    assert_eq!(report.after, None);
}

#[test]
fn test_probe_clears_after_read_without_affecting_result() {
    let slot = ThreadLocalSlot::new();
    let report = probe("worker-00004", &slot, Duration::ZERO, true);

    // The clear happens after the read-back, so the comparison still holds…
    assert!(report.matched);
    // …and the calling unit's slot is back to its empty state
    assert_eq!(slot.load(), None);
}

#[test]
fn test_report_display_line() {
    let slot = ThreadLocalSlot::new();
    let report = probe("worker-00005", &slot, Duration::ZERO, false);
    let line = report.to_string();

    assert!(line.starts_with("worker-00005: before="));
    assert!(line.contains("matched=true"));
}

#[test]
fn test_report_display_renders_empty_read() {
    let report = probe("worker-00006", &AmnesiacSlot, Duration::ZERO, false);
    let line = report.to_string();

    assert!(line.contains("after=<empty>"));
    assert!(line.ends_with("matched=false"));
}
