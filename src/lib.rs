//! # skel
//!
//! A command-line program skeleton. Commands are registered by name into an
//! explicit registry at startup, the dispatchable subset is computed into a
//! catalog, and the first positional argument selects which command receives
//! the remaining parameters.

pub mod cli;
pub mod constants;
pub mod core;
pub mod system;

/// The process-style status a command returns. `0` means success.
pub type ExitStatus = i32;
