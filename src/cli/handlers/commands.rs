use anyhow::Result;
use clap::Parser;

use crate::{ExitStatus, core::context::AppContext};

pub const DESCRIPTION: &str = "\
List the commands that can be dispatched.

Usage: skel commands [-l|--long]

Prints one command name per line, sorted. Internal commands are never listed.

Options:
  -l, --long   Also print the first line of each command's description";

#[derive(Parser, Debug, Default)]
#[command(name = "skel commands", no_binary_name = true)]
struct CommandsArgs {
    /// Also print each command's one-line summary.
    #[arg(long, short)]
    long: bool,
}

pub fn handle(ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
    let commands_args = CommandsArgs::try_parse_from(params)?;
    for line in list_lines(ctx, commands_args.long) {
        println!("{}", line);
    }
    Ok(0)
}

/// One line per catalog entry, in catalog order.
fn list_lines(ctx: &AppContext, long: bool) -> Vec<String> {
    if !long {
        return ctx.catalog.iter().map(str::to_string).collect();
    }

    let width = ctx.catalog.iter().map(str::len).max().unwrap_or(0);
    ctx.catalog
        .iter()
        .map(|name| {
            let summary = ctx.descriptions.summary(name).unwrap_or_default();
            format!("{:<width$}  {}", name, summary, width = width)
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::register_builtins;

    #[test]
    fn test_lists_catalog_names_sorted() {
        let mut ctx = AppContext::for_tests();
        register_builtins(&mut ctx).unwrap();
        ctx.commands
            .register("_secret", |_: &AppContext, _: &[String]| -> Result<ExitStatus> {
                Ok(0)
            })
            .unwrap();
        ctx.refresh_catalog();

        assert_eq!(
            list_lines(&ctx, false),
            ["commands", "greet", "help", "install", "version"]
        );
    }

    #[test]
    fn test_long_listing_includes_summaries() {
        let mut ctx = AppContext::for_tests();
        register_builtins(&mut ctx).unwrap();
        ctx.commands
            .register("bare", |_: &AppContext, _: &[String]| -> Result<ExitStatus> { Ok(0) })
            .unwrap();
        ctx.refresh_catalog();

        let lines = list_lines(&ctx, true);
        assert!(lines.contains(&"bare".to_string()));
        assert!(
            lines
                .iter()
                .any(|line| line.starts_with("commands") && line.ends_with("List the commands that can be dispatched."))
        );
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        let ctx = AppContext::for_tests();
        assert!(handle(&ctx, &["--bogus".to_string()]).is_err());
    }
}
