// EN: src/cli/handlers/script.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

use crate::{
    ExitStatus,
    constants::STDIN_DESCRIPTION_SOURCE,
    core::{
        catalog,
        config_loader::{self, ScriptCommandConfig},
        context::AppContext,
        registry::Command,
    },
    system::executor,
};

/// A command declared under `[commands.<name>]` in the config file.
#[derive(Debug, Clone)]
pub struct ScriptCommand {
    name: String,
    command_line: String,
}

impl ScriptCommand {
    /// Creates a script command that runs `command_line`.
    pub fn new(name: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_line: command_line.into(),
        }
    }
}

impl Command for ScriptCommand {
    fn run(&self, ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
        ctx.tracer.trace(format_args!(
            "running script '{}': {} {:?}",
            self.name, self.command_line, params
        ));
        let cwd = std::env::current_dir().context("Could not determine the current directory")?;
        executor::execute_command(&self.command_line, params, &cwd)
            .with_context(|| format!("Script command '{}' failed to start", self.name))
    }
}

/// Defines every `[commands.<name>]` entry from the settings and registers its
/// description. Entries replace built-ins of the same name.
///
/// A `description_file` of `-` reads from standard input. Several entries may
/// share it; each one consumes up to its own terminator.
pub fn register_script_commands(ctx: &mut AppContext) -> Result<()> {
    register_script_commands_with_input(ctx, io::stdin().lock())
}

fn register_script_commands_with_input<R: BufRead>(ctx: &mut AppContext, mut input: R) -> Result<()> {
    let entries = ctx.settings.commands.clone();
    for (name, entry) in entries {
        if catalog::is_reserved(&name) {
            log::warn!(
                "Script command '{}' uses a reserved name and will not be dispatchable.",
                name
            );
        }
        ctx.commands
            .register(&name, ScriptCommand::new(name.clone(), entry.run.clone()))?;
        register_description(ctx, &name, &entry, &mut input)?;
    }
    Ok(())
}

/// Inline text wins over a description file. Neither is required.
fn register_description<R: BufRead>(
    ctx: &mut AppContext,
    name: &str,
    entry: &ScriptCommandConfig,
    input: &mut R,
) -> Result<()> {
    if let Some(text) = &entry.description {
        ctx.descriptions.register(name, text.as_str())?;
    } else if entry.description_file.as_deref() == Some(STDIN_DESCRIPTION_SOURCE) {
        ctx.descriptions
            .register_from_reader(name, input, &entry.description_terminator)
            .with_context(|| format!("Could not read the description of '{}' from stdin", name))?;
    } else if let Some(file) = &entry.description_file {
        let path = config_loader::expand_path(file)?;
        let reader = File::open(&path).with_context(|| {
            format!(
                "Could not open description file '{}' for '{}'",
                path.display(),
                name
            )
        })?;
        ctx.descriptions.register_from_reader(
            name,
            BufReader::new(reader),
            &entry.description_terminator,
        )?;
    } else {
        ctx.descriptions
            .register(name, format!("Run `{}`.", entry.run))?;
    }
    Ok(())
}
