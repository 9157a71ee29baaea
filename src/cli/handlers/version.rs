use anyhow::Result;

use crate::{ExitStatus, core::context::AppContext};

pub const DESCRIPTION: &str = "\
Print the program name and version.

Usage: skel version
       skel --version";

/// `<package name> <package version>`.
pub fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn handle(ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
    if !params.is_empty() {
        log::debug!("'version' ignores its parameters: {:?}", params);
    }
    ctx.tracer.trace("printing version");
    println!("{}", version_line());
    Ok(0)
}
