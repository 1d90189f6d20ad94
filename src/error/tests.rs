//! Unit tests for error module

use std::io;

use crate::error::CheckError;

#[test]
fn test_worker_panicked_display() {
    let err = CheckError::WorkerPanicked {
        label: "worker-00099".to_string(),
        panic_message: "assertion failed".to_string(),
    };
    let display = format!("{}", err);

    assert!(display.contains("Worker worker-00099 panicked"));
    assert!(display.contains("assertion failed"));
    assert!(display.contains("entire run is aborted"));
}

#[test]
fn test_spawn_display_includes_cause() {
    let err = CheckError::Spawn {
        label: "worker-00001".to_string(),
        source: io::Error::new(io::ErrorKind::WouldBlock, "resource exhausted"),
    };
    let display = format!("{}", err);

    assert!(display.contains("worker-00001"));
    assert!(display.contains("resource exhausted"));
}

#[test]
fn test_std_error_impl() {
    let err = CheckError::WorkerPanicked {
        label: "worker-00001".to_string(),
        panic_message: "test panic".to_string(),
    };
    let err_ref: &dyn std::error::Error = &err;

    let _ = err_ref.to_string();
    assert!(err_ref.source().is_none()); // panics don't chain

    let err = CheckError::Spawn {
        label: "worker-00002".to_string(),
        source: io::Error::new(io::ErrorKind::Other, "no threads left"),
    };
    let err_ref: &dyn std::error::Error = &err;
    assert!(err_ref.source().is_some()); // spawn failures keep the io cause
}
