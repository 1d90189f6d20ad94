//! Isolation invariant: with correctly isolated storage, no worker ever
//! reads back a value it did not write, for any worker count and any delay.

mod common;

use std::time::Duration;

use isolocal::{CheckConfig, Checker, KeyedSlot, ThreadLocalSlot};

#[test]
fn single_worker_no_delay() {
    common::init_tracing();

    let checker = Checker::new(CheckConfig::new(1, Duration::ZERO));
    let report = checker.run(&ThreadLocalSlot::new()).unwrap();

    assert!(report.is_isolated());
    assert_eq!(report.reports.len(), 1); // exactly one diagnostic line
}

#[test]
fn ten_workers_with_interleaving_window() {
    common::init_tracing();

    let checker = Checker::new(CheckConfig::new(10, Duration::from_micros(100)));
    let report = checker.run(&ThreadLocalSlot::new()).unwrap();

    assert_eq!(report.mismatches, 0);
    assert_eq!(report.reports.len(), 10);
    assert!(report.reports.iter().all(|r| r.matched));
}

#[test]
fn keyed_table_is_just_as_isolated() {
    common::init_tracing();

    let checker = Checker::new(CheckConfig::new(10, Duration::from_micros(100)));
    let report = checker.run(&KeyedSlot::new()).unwrap();

    assert_eq!(report.mismatches, 0);
}

#[test]
fn large_fan_out_terminates_and_stays_clean() {
    common::init_tracing();

    let checker = Checker::new(CheckConfig::new(1000, Duration::from_micros(50)));
    let report = checker.run(&ThreadLocalSlot::new()).unwrap();

    assert_eq!(report.workers, 1000);
    assert_eq!(report.reports.len(), 1000);
    assert!(report.is_isolated());
}

#[test]
fn every_worker_writes_a_distinct_view() {
    common::init_tracing();

    // Distinct stamps are not required for the invariant, but each worker
    // must compare against its own write, not anyone else's
    let checker = Checker::new(CheckConfig::new(10, Duration::from_micros(100)));
    let report = checker.run(&ThreadLocalSlot::new()).unwrap();

    for r in &report.reports {
        assert_eq!(r.after.as_deref(), Some(r.before.as_str()));
    }
}
