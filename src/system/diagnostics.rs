// src/system/diagnostics.rs

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use colored::Colorize;

use crate::constants::TRACE_SEPARATOR_WIDTH;

/// The `--debug` trace facility.
///
/// When disabled, `trace` does nothing beyond the flag check. When enabled,
/// each call prints `[n] message` and a separator line to the sink, which is
/// standard error unless a test injects another writer. Trace output never
/// goes to standard output.
pub struct Tracer {
    enabled: bool,
    counter: AtomicU64,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.enabled)
            .field("counter", &self.counter.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Tracer {
    /// A tracer writing to standard error.
    pub fn stderr(enabled: bool) -> Self {
        Self::with_sink(enabled, Box::new(io::stderr()))
    }

    /// A tracer writing to an arbitrary sink.
    pub fn with_sink(enabled: bool, sink: Box<dyn Write + Send>) -> Self {
        Self {
            enabled,
            counter: AtomicU64::new(0),
            sink: Mutex::new(sink),
        }
    }

    /// A tracer that never prints.
    pub fn disabled() -> Self {
        Self::with_sink(false, Box::new(io::sink()))
    }

    /// Prints one numbered trace entry. Pass `format_args!` to keep the
    /// disabled path free of formatting work.
    pub fn trace(&self, message: impl fmt::Display) {
        if !self.enabled {
            return;
        }

        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let separator = "-".repeat(TRACE_SEPARATOR_WIDTH);
        if let Ok(mut sink) = self.sink.lock() {
            // Write failures on the trace stream are ignored.
            let _ = writeln!(sink, "{} {}", format!("[{}]", n).dimmed(), message);
            let _ = writeln!(sink, "{}", separator.dimmed());
            let _ = sink.flush();
        }
    }

    /// Number of entries printed so far.
    pub fn count(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

/// Prints `message` to standard error behind an error marker and terminates
/// the process with status 1. Only the binary's top-level handler calls this.
pub fn fatal(message: impl fmt::Display) -> ! {
    eprintln!("\n{}: {}", "Error".red().bold(), message);
    std::process::exit(1);
}
