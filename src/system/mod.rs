//! # System Interaction Layer
//!
//! Abstractions for interacting with the underlying operating system.
//!
//! ## Modules
//!
//! - **`diagnostics`**: The `--debug` trace facility and the fatal-error exit path.
//! - **`executor`**: Spawns external processes for script commands and pipes
//!   fetched scripts into a shell, returning the child's exit code.
//! - **`fetch`**: Blocking HTTP download used by the `install` command.

pub mod diagnostics;
pub mod executor;
pub mod fetch;
