// src/core/errors.rs

use thiserror::Error;

/// Failures raised by the dispatch framework itself.
///
/// A command's own non-zero status is not represented here: it is returned
/// as a plain `ExitStatus` and becomes the process status untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
