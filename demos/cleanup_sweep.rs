//! # Large Sweep with Cleanup
//!
//! Spawns 100,000 workers against an identity-keyed table slot, with a 100µs
//! interleaving window and clear-after-read enabled. Only violations are
//! printed; the summary reports the tally, the elapsed wall-clock time in
//! milliseconds, and how many table entries the dead workers left behind
//! (zero, because every worker cleared its slot).
//!
//! ## Running This Demo
//!
//! ```bash
//! cargo run --release --example cleanup_sweep
//!
//! # With execution tracing
//! RUST_LOG=isolocal=info cargo run --release --example cleanup_sweep --features tracing
//! ```
//!
//! ## Expected Output
//!
//! ```text
//! mismatches: 0 (elapsed: 8512 ms, retained entries: 0)
//! ```

use std::time::Duration;

use isolocal::{Capture, CheckConfig, Checker, KeyedSlot};

const WORKERS: usize = 100_000;
const DELAY: Duration = Duration::from_micros(100);

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("isolocal=info")),
        )
        .init();

    let checker = Checker::new(
        CheckConfig::new(WORKERS, DELAY)
            .clear_after_read(true)
            .capture(Capture::MismatchesOnly),
    );

    let slot = KeyedSlot::new();
    let report = checker.run(&slot).unwrap();

    for line in &report.reports {
        println!("{line}");
    }
    println!(
        "mismatches: {} (elapsed: {} ms, retained entries: {})",
        report.mismatches,
        report.elapsed.as_millis(),
        slot.retained()
    );
}
