use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::{ExitStatus, core::context::AppContext};

pub const DESCRIPTION: &str = "\
Show usage information.

Usage: skel help [command]

Without a command, lists the global options and every available command.
With a command, prints that command's description.";

/// Global options, as shown in the overview.
const GLOBAL_OPTIONS: &[(&str, &str)] = &[
    ("-h, --help", "Show this help"),
    ("--version", "Print version information"),
    ("--debug", "Print numbered trace output to stderr"),
];

#[derive(Parser, Debug, Default)]
#[command(name = "skel help", no_binary_name = true)]
struct HelpArgs {
    /// The command to describe.
    command: Option<String>,
}

pub fn handle(ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
    let help_args = HelpArgs::try_parse_from(params)?;

    let text = match help_args.command.as_deref() {
        Some(name) => render_topic(ctx, name),
        None => render_overview(ctx),
    };
    println!("{}", text);
    Ok(0)
}

/// The description registered for `name`, or the registry's fallback text.
pub fn render_topic(ctx: &AppContext, name: &str) -> String {
    ctx.tracer.trace(format_args!("describing '{}'", name));
    ctx.descriptions.describe(name)
}

/// Usage line, global options and the command list with one-line summaries.
pub fn render_overview(ctx: &AppContext) -> String {
    let program = ctx.display_name();
    let mut lines = vec![
        format!(
            "{} {} [-h|--help | --version | --debug]* <command> [args...]",
            "Usage:".yellow().bold(),
            program
        ),
        String::new(),
        "Options:".yellow().bold().to_string(),
    ];

    let option_width = GLOBAL_OPTIONS
        .iter()
        .map(|(flag, _)| flag.len())
        .max()
        .unwrap_or(0);
    for (flag, summary) in GLOBAL_OPTIONS {
        lines.push(format!(
            "  {}  {}",
            format!("{:<width$}", flag, width = option_width).cyan(),
            summary
        ));
    }

    lines.push(String::new());
    lines.push("Commands:".yellow().bold().to_string());
    let name_width = ctx.catalog.iter().map(str::len).max().unwrap_or(0);
    for name in ctx.catalog.iter() {
        let summary = ctx.descriptions.summary(name).unwrap_or_default();
        lines.push(format!(
            "  {}  {}",
            format!("{:<width$}", name, width = name_width).cyan(),
            summary
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Run '{} help <command>' for details on a specific command.",
        program
    ));
    lines.join("\n")
}
