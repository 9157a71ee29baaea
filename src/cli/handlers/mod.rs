// EN: src/cli/handlers/mod.rs

// This module contains the logic for each built-in command, plus the loader
// for script commands declared in the config file.

use anyhow::Result;

use crate::{ExitStatus, core::context::AppContext};

pub mod commands;
pub mod greet;
pub mod help;
pub mod install;
pub mod script;
pub mod version;

// --- Built-in Definition and Registry ---

/// A built-in command, its help text, and its handler.
struct BuiltinDefinition {
    name: &'static str,
    description: &'static str,
    handler: fn(&AppContext, &[String]) -> Result<ExitStatus>,
}

/// The single source of truth for all built-in commands.
static BUILTINS: &[BuiltinDefinition] = &[
    BuiltinDefinition {
        name: "commands",
        description: commands::DESCRIPTION,
        handler: commands::handle,
    },
    BuiltinDefinition {
        name: "greet",
        description: greet::DESCRIPTION,
        handler: greet::handle,
    },
    BuiltinDefinition {
        name: "help",
        description: help::DESCRIPTION,
        handler: help::handle,
    },
    BuiltinDefinition {
        name: "install",
        description: install::DESCRIPTION,
        handler: install::handle,
    },
    BuiltinDefinition {
        name: "version",
        description: version::DESCRIPTION,
        handler: version::handle,
    },
];

/// Defines every built-in command and registers its description alongside it.
pub fn register_builtins(ctx: &mut AppContext) -> Result<()> {
    for builtin in BUILTINS {
        ctx.commands.register(builtin.name, builtin.handler)?;
        ctx.descriptions.register(builtin.name, builtin.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_is_dispatchable_and_described() {
        let mut ctx = AppContext::for_tests();
        register_builtins(&mut ctx).unwrap();
        let catalog = ctx.refresh_catalog().clone();

        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            ["commands", "greet", "help", "install", "version"]
        );
        for name in catalog.iter() {
            assert!(ctx.descriptions.contains(name), "'{}' has no description", name);
            assert!(ctx.descriptions.summary(name).is_some());
        }
    }

    #[test]
    fn test_default_command_is_a_builtin() {
        let mut ctx = AppContext::for_tests();
        register_builtins(&mut ctx).unwrap();
        ctx.refresh_catalog();
        assert!(ctx.catalog.contains(&ctx.settings.default_command));
    }
}
