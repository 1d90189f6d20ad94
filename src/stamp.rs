//! Wall-clock stamps used as worker "before" values.

use chrono::Utc;

/// Timestamp format with microsecond precision, fine enough to tell apart
/// writes separated by the delays workers sleep for.
pub(crate) const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// The current UTC time, rendered as a string.
///
/// The checker only ever compares stamps for exact string equality, so the
/// format itself carries no meaning; it just has to be deterministic within
/// a worker and distinguishable across time.
pub fn now() -> String {
    Utc::now().format(FORMAT).to_string()
}
