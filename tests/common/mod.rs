// Common test utilities and helpers for the integration suite
#![allow(dead_code)] // not every test binary uses every helper

use isolocal::Slot;

// Initialize tracing subscriber for tests (idempotent)
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init()
            .ok();
    });
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {
    // No-op when tracing is disabled
}

/// A slot that hands every worker a value no worker ever wrote. Running the
/// checker against it makes every single worker mismatch, which pins the
/// counter to exactly the worker count.
pub struct ForeignSlot;

impl Slot for ForeignSlot {
    fn store(&self, _value: String) {}

    fn load(&self) -> Option<String> {
        Some("a foreign value".to_string())
    }

    fn clear(&self) {}
}
