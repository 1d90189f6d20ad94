//! Thread-Local Isolation Checker
//!
//! `isolocal` empirically demonstrates (or refutes) that a per-thread
//! storage slot is actually isolated per thread. It fans out a configurable
//! number of OS-thread workers; each worker writes a fresh timestamp string
//! into the slot, sleeps briefly to let every other worker interleave, reads
//! the slot back, and compares. A shared atomic counter tallies workers whose
//! read did not match their write, and the run blocks on a completion barrier
//! until every worker has signalled.
//!
//! Under a correct thread-local implementation the answer is always zero
//! mismatches: no worker can observe another's write. The crate exists to
//! make that invariant observable, and to make the *violation* observable
//! too, via a deliberately shared storage implementation.
//!
//! # Features
//!
//! - **Storage as a seam**: the [`Slot`] trait scopes `store`/`load`/`clear`
//!   to the calling thread. Swap implementations to compare a true
//!   thread-local ([`ThreadLocalSlot`]), an explicit identity-keyed table
//!   ([`KeyedSlot`]), and an intentionally broken shared cell
//!   ([`SharedSlot`]).
//! - **Exact tally**: mismatches are counted on a shared atomic; concurrent
//!   increments are never lost, and the count is read only after the
//!   completion barrier releases.
//! - **Honest completion**: the report channel doubles as the barrier. Each
//!   worker sends exactly one report; the drain ends when the last sender
//!   drops, so the aggregate result cannot be read early.
//! - **Failure is data**: a non-zero mismatch count is a reported result,
//!   not an error. The only errors are a worker thread failing to spawn or
//!   dying mid-probe; see [`CheckError`].
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use isolocal::{CheckConfig, Checker, ThreadLocalSlot};
//!
//! let checker = Checker::new(CheckConfig::new(8, Duration::from_micros(50)));
//! let report = checker.run(&ThreadLocalSlot::new()).unwrap();
//!
//! assert!(report.is_isolated());
//! for line in &report.reports {
//!     println!("{line}");
//! }
//! ```
//!
//! And the same run against storage that is *not* isolated:
//!
//! ```
//! use std::time::Duration;
//! use isolocal::{Capture, CheckConfig, Checker, SharedSlot};
//!
//! let checker = Checker::new(
//!     CheckConfig::new(8, Duration::from_millis(50)).capture(Capture::MismatchesOnly),
//! );
//! let report = checker.run(&SharedSlot::new()).unwrap();
//!
//! // Workers read back whatever was written last into the shared cell;
//! // with the delay dwarfing the spawn spread, all but the last writer see
//! // a foreign value.
//! assert!(!report.is_isolated());
//! ```
//!
//! # Cleanup
//!
//! Pooled or long-lived execution units keep their slot entries alive after
//! the work is done; [`CheckConfig::clear_after_read`] models the explicit
//! release that bounds such growth. [`KeyedSlot::retained`] makes the effect
//! measurable: without clearing, a run leaves one table entry per dead
//! worker behind.
//!
//! # Optional Tracing Support
//!
//! `isolocal` provides optional observability through the `tracing` crate
//! with zero overhead when disabled: instrumentation is conditionally
//! compiled behind the `tracing` feature and the crate isn't even linked
//! otherwise.
//!
//! ```toml
//! [dependencies]
//! isolocal = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ## Log Levels
//!
//! - **INFO**: run start/completion with the final tally
//! - **DEBUG**: fan-out structure, completion barrier
//! - **TRACE**: per-worker spawn and probe completion
//! - **ERROR**: isolation violations, worker panics
//!
//! Control the level with the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=isolocal=info  cargo run --example isolation_sweep --features tracing
//! RUST_LOG=isolocal=trace cargo run --example isolation_sweep --features tracing
//! ```

mod checker;
mod config;
mod error;
mod slot;
pub mod stamp;
mod worker;

// Public re-exports
pub use checker::{Checker, RunReport};
pub use config::{Capture, CheckConfig};
pub use error::{CheckError, CheckResult};
pub use slot::{KeyedSlot, SharedSlot, Slot, ThreadLocalSlot};
pub use worker::WorkerReport;
