//! # Full Isolation Sweep
//!
//! Spawns 5,000 workers against a true thread-local slot. Each worker writes
//! a timestamp, sleeps 10µs so every other worker can interleave, reads the
//! slot back, and compares. The run prints one diagnostic line per worker
//! plus the final tally.
//!
//! ## What You'll See
//!
//! Every line ends in `matched=true`, and the tally is zero: thread-local
//! storage isolates each worker's write by construction. Swap the
//! `ThreadLocalSlot` for a `SharedSlot` to watch the same sweep fail.
//!
//! ## Running This Demo
//!
//! ```bash
//! cargo run --release --example isolation_sweep
//!
//! # With execution tracing
//! RUST_LOG=isolocal=debug cargo run --release --example isolation_sweep --features tracing
//! ```
//!
//! ## Expected Output
//!
//! ```text
//! worker-00004: before=2026-08-07 12:00:00.000123 after=2026-08-07 12:00:00.000123 matched=true
//! ...
//! mismatches: 0
//! ```

use std::time::Duration;

use isolocal::{CheckConfig, Checker, ThreadLocalSlot};

const WORKERS: usize = 5_000;
const DELAY: Duration = Duration::from_micros(10);

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("isolocal=info")),
        )
        .init();

    let checker = Checker::new(CheckConfig::new(WORKERS, DELAY));
    let report = checker.run(&ThreadLocalSlot::new()).unwrap();

    for line in &report.reports {
        println!("{line}");
    }
    println!("mismatches: {}", report.mismatches);
}
