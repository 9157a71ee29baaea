// EN: src/bin/skel.rs

use skel::{cli, core::arg_parser::ParsedInvocation, system::diagnostics};

/// The main entry point of the `skel` application.
/// It normalizes the arguments, sets up logging, runs the dispatcher,
/// and performs centralized error handling.
fn main() {
    let invocation = match ParsedInvocation::from_os_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => diagnostics::fatal(e),
    };

    // `--debug` raises the default log level; RUST_LOG still wins when set.
    let default_filter = if invocation.debug_enabled() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli::run(&invocation) {
        Ok(status) => std::process::exit(status),
        // --- Centralized Error Handling ---
        // Unknown commands, usage errors and command failures all end here.
        Err(e) => diagnostics::fatal(format!("{:#}", e)),
    }
}
