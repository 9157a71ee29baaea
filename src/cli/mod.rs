// src/cli/mod.rs

use anyhow::Result;

use crate::{
    ExitStatus,
    core::{arg_parser::ParsedInvocation, config_loader, context::AppContext},
    system::diagnostics::Tracer,
};

pub mod dispatcher;
pub mod handlers;

/// Runs one invocation end to end: settings, command definitions, catalog, dispatch.
///
/// Returns the dispatched command's status. Framework failures (unknown
/// command, bad config, usage errors) come back as `Err`; the caller decides
/// how to report them and which status to exit with.
pub fn run(invocation: &ParsedInvocation) -> Result<ExitStatus> {
    // 1. Load configuration.
    let settings = config_loader::load_settings()?;

    // 2. Build the application context for this run.
    let tracer = Tracer::stderr(invocation.debug_enabled());
    let mut ctx = AppContext::new(invocation.program(), settings, tracer);
    ctx.tracer.trace(format_args!(
        "invocation: command={:?} argv={:?}",
        invocation.command_name(),
        invocation.command_argv()
    ));

    // 3. Define commands. Each one registers its description as it is defined.
    handlers::register_builtins(&mut ctx)?;
    handlers::script::register_script_commands(&mut ctx)?;

    // 4. Build the catalog and dispatch.
    execute(&mut ctx, invocation)
}

/// Rebuilds the catalog from whatever `ctx` defines now, then dispatches once.
pub fn execute(ctx: &mut AppContext, invocation: &ParsedInvocation) -> Result<ExitStatus> {
    let catalog = ctx.refresh_catalog();
    log::debug!("Catalog: {:?}", catalog.iter().collect::<Vec<_>>());
    ctx.tracer
        .trace(format_args!("catalog has {} commands", ctx.catalog.len()));
    dispatcher::dispatch(ctx, invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config_loader::Settings;
    use crate::core::errors::FrameworkError;
    use crate::system::diagnostics::tests::SharedBuffer;

    fn context_with_builtins(tracer: Tracer) -> AppContext {
        let mut ctx = AppContext::new("prog", Settings::default(), tracer);
        handlers::register_builtins(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_debug_help_commands_scenario() {
        let buffer = SharedBuffer::default();
        let invocation = ParsedInvocation::parse(["prog", "--debug", "help", "commands"]);
        let mut ctx = context_with_builtins(Tracer::with_sink(
            invocation.debug_enabled(),
            Box::new(buffer.clone()),
        ));

        let status = execute(&mut ctx, &invocation).unwrap();

        assert_eq!(status, 0);
        let trace = buffer.contents();
        assert!(trace.contains("[1]"));
        assert!(trace.contains("describing 'commands'"));
        assert_eq!(
            handlers::help::render_topic(&ctx, "commands"),
            handlers::commands::DESCRIPTION
        );
    }

    #[test]
    fn test_no_arguments_runs_default_command() {
        let mut ctx = context_with_builtins(Tracer::disabled());
        let invocation = ParsedInvocation::parse(["prog"]);
        assert_eq!(execute(&mut ctx, &invocation).unwrap(), 0);
    }

    #[test]
    fn test_bogus_command_is_unknown() {
        let mut ctx = context_with_builtins(Tracer::disabled());
        let invocation = ParsedInvocation::parse(["prog", "bogus"]);
        let err = execute(&mut ctx, &invocation).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FrameworkError>(),
            Some(&FrameworkError::UnknownCommand("bogus".to_string()))
        );
        assert_eq!(err.to_string(), "Unknown command: bogus");
    }

    #[test]
    fn test_commands_defined_after_startup_are_dispatchable() {
        let mut ctx = context_with_builtins(Tracer::disabled());
        ctx.commands
            .register("late", |_: &AppContext, params: &[String]| -> Result<ExitStatus> {
                Ok(ExitStatus::try_from(params.len())?)
            })
            .unwrap();

        let invocation = ParsedInvocation::parse(["prog", "late", "a", "b"]);
        assert_eq!(execute(&mut ctx, &invocation).unwrap(), 2);
    }
}
