// src/core/registry.rs

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;

use super::context::AppContext;
use super::errors::FrameworkError;
use crate::ExitStatus;

/// Anything that can be invoked by name with the residual parameters.
///
/// `params` is the invocation's parameter slice: `params[0]` is the first
/// token after the command name.
pub trait Command {
    /// Runs the command and returns its process-style status.
    fn run(&self, ctx: &AppContext, params: &[String]) -> Result<ExitStatus>;
}

impl<F> Command for F
where
    F: Fn(&AppContext, &[String]) -> Result<ExitStatus>,
{
    fn run(&self, ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
        self(ctx, params)
    }
}

/// Every command defined in the process, internal ones included.
///
/// This is the explicit stand-in for "all callable units": the catalog is
/// derived from it, and the dispatcher invokes out of it.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name`. A previous definition under the same name is replaced.
    ///
    /// # Errors
    /// Returns `FrameworkError::Usage` if `name` is empty.
    pub fn register<C>(&mut self, name: &str, command: C) -> Result<(), FrameworkError>
    where
        C: Command + 'static,
    {
        if name.is_empty() {
            return Err(FrameworkError::Usage(
                "a command name is required to define a command".to_string(),
            ));
        }
        if self.commands.insert(name.to_string(), Box::new(command)).is_some() {
            log::warn!("Command '{}' was redefined; the latest definition wins.", name);
        } else {
            log::debug!("Defined command '{}'", name);
        }
        Ok(())
    }

    /// Looks up a defined command by its exact name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Names of every defined command, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Number of defined commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is defined.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
