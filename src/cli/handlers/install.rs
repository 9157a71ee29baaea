// EN: src/cli/handlers/install.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use thiserror::Error;

use crate::{
    ExitStatus,
    constants::OS_PLACEHOLDER,
    core::context::AppContext,
    system::{executor, fetch},
};

pub const DESCRIPTION: &str = "\
Fetch the install script for an operating system and run it.

Usage: skel install [os] [--url <url>] [--shell <shell>] [--dry-run] [-- <script args>...]

Arguments:
  os                One of: linux, darwin, freebsd (default: the running system)

Options:
  --url <url>       URL template to fetch; {os} is replaced by the target system
                    (default: [install].url from the config file)
  --shell <shell>   Interpreter the script is piped to (default: [install].shell, or sh)
  --dry-run         Print the URL and the fetched script without running it

The script is executed as downloaded. Its exit status becomes skel's exit status.";

/// Operating systems an install script exists for.
pub const SUPPORTED_OS: &[&str] = &["linux", "darwin", "freebsd"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InstallError {
    #[error("Unsupported operating system '{os}'. Supported: {supported}.")]
    UnsupportedOs { os: String, supported: String },
    #[error("No install URL configured. Set [install].url in the config file or pass --url.")]
    MissingUrl,
}

#[derive(Parser, Debug, Default)]
#[command(name = "skel install", no_binary_name = true)]
struct InstallArgs {
    /// Target operating system. Detected from the running system when omitted.
    os: Option<String>,

    /// URL template to fetch; `{os}` is replaced by the target system.
    #[arg(long)]
    url: Option<String>,

    /// Interpreter the fetched script is piped to.
    #[arg(long)]
    shell: Option<String>,

    /// Print what would run without running it.
    #[arg(long)]
    dry_run: bool,

    /// Arguments passed to the install script.
    #[arg(last = true)]
    script_args: Vec<String>,
}

/// The running system's name, in the form install scripts are published under.
pub fn detect_os() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Lower-cases `os`, folds common macOS spellings into `darwin`, and checks
/// it against `SUPPORTED_OS`.
pub fn normalize_os(os: &str) -> Result<String, InstallError> {
    let lowered = os.trim().to_lowercase();
    let normalized = match lowered.as_str() {
        "macos" | "osx" | "mac" => "darwin".to_string(),
        _ => lowered,
    };

    if SUPPORTED_OS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(InstallError::UnsupportedOs {
            os: os.to_string(),
            supported: SUPPORTED_OS.join(", "),
        })
    }
}

/// Fills the `{os}` placeholder of a URL template.
pub fn resolve_url(template: &str, os: &str) -> String {
    template.replace(OS_PLACEHOLDER, os)
}

pub fn handle(ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
    // 1. Parse args.
    let install_args = InstallArgs::try_parse_from(params)?;

    // 2. Validate the target system; the running one is the default.
    let requested_os = install_args.os.as_deref().unwrap_or(detect_os());
    let os = normalize_os(requested_os)?;
    ctx.tracer.trace(format_args!("install target: {}", os));

    // 3. Resolve where the script comes from and what runs it.
    let template = install_args
        .url
        .as_deref()
        .or(ctx.settings.install.url.as_deref())
        .ok_or(InstallError::MissingUrl)?;
    let url = resolve_url(template, &os);
    let shell = install_args
        .shell
        .as_deref()
        .unwrap_or(ctx.settings.install.shell.as_str());

    // 4. Fetch.
    ctx.tracer.trace(format_args!("fetching {}", url));
    let script = fetch::fetch_text(&url)?;

    if install_args.dry_run {
        println!("{} {} | {}", "Would run:".yellow().bold(), url.cyan(), shell);
        println!("{}", script);
        return Ok(0);
    }

    // 5. Hand the script to the shell; its status is ours.
    println!("{} {}", "Installing from".green(), url.cyan());
    ctx.tracer
        .trace(format_args!("piping {} bytes to {}", script.len(), shell));
    executor::run_script(shell, &script, &install_args.script_args)
        .with_context(|| format!("Failed to run the install script from '{}'", url))
}
