// crates/shared-kernel/tests/error_context.rs
use std::path::PathBuf;

use ordstats_shared_kernel::{ErrorContext, InfrastructureError};

fn missing() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::FileNotFound { path: PathBuf::from("jan.csv") })
}

#[test]
fn context_wraps_and_formats() {
    let err = missing().context("reading statistics").unwrap_err();

    let display = err.to_string();
    assert!(display.starts_with("reading statistics: "));
    assert!(display.contains("Input file does not exist: 'jan.csv'"));
    assert!(err.is_file_not_found());
}

#[test]
fn with_context_is_lazy_and_formats() {
    let err = missing().with_context(|| format!("writing {}", "out.csv")).unwrap_err();
    assert!(err.to_string().starts_with("writing out.csv: "));
}
