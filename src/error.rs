//! Error types for check runs.
//!
//! A non-zero mismatch count is a reported result, never an error; the only
//! failures surfaced here are the ones that prevent a run from producing its
//! tally at all.

use std::io;

/// Errors that can occur while fanning out and joining a check run
#[derive(Debug)]
#[non_exhaustive]
pub enum CheckError {
    /// A worker thread could not be created
    Spawn { label: String, source: io::Error },
    /// A worker panicked between spawn and completion
    WorkerPanicked { label: String, panic_message: String },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::Spawn { label, source } => {
                write!(f, "could not spawn worker thread {}: {}", label, source)
            }
            CheckError::WorkerPanicked {
                label,
                panic_message,
            } => {
                write!(
                    f,
                    "Worker {} panicked during its probe: {}\n\
                     \n\
                     A worker has no recovery path; the entire run is aborted \
                     and no tally is reported.",
                    label, panic_message
                )
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Spawn { source, .. } => Some(source),
            CheckError::WorkerPanicked { .. } => None,
        }
    }
}

/// Result type for check runs
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests;
