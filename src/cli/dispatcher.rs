use anyhow::Result;

use crate::{
    ExitStatus,
    core::{arg_parser::ParsedInvocation, context::AppContext, errors::FrameworkError},
};

/// Where a dispatch attempt stands. Every run goes through these states once.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DispatchState<'a> {
    /// Nothing looked up yet.
    Unresolved,
    /// A concrete name awaiting the catalog membership check.
    Resolving(&'a str),
    /// The command was handed control.
    Dispatched(&'a str),
    /// The name is not in the catalog.
    Rejected(&'a str),
}

/// Resolves the invocation's command against the catalog and runs it.
///
/// The catalog must have been refreshed beforehand. A name outside the catalog
/// is rejected with `FrameworkError::UnknownCommand` and nothing is invoked.
/// Otherwise the command runs exactly once with the invocation's parameters,
/// and whatever it returns is returned untouched.
pub fn dispatch(ctx: &AppContext, invocation: &ParsedInvocation) -> Result<ExitStatus> {
    let mut state = DispatchState::Unresolved;

    loop {
        ctx.tracer.trace(format_args!("dispatch state: {:?}", state));
        state = match state {
            DispatchState::Unresolved => DispatchState::Resolving(
                invocation.resolve_command_name(ctx.settings.default_command.as_str()),
            ),
            DispatchState::Resolving(name) => {
                if ctx.catalog.contains(name) {
                    DispatchState::Dispatched(name)
                } else {
                    DispatchState::Rejected(name)
                }
            }
            DispatchState::Dispatched(name) => {
                // The catalog is derived from the registry, so a catalog hit is defined.
                let command = ctx
                    .commands
                    .get(name)
                    .ok_or_else(|| FrameworkError::UnknownCommand(name.to_string()))?;
                let params = invocation.command_parameters();
                log::debug!("Dispatching '{}' with {:?}", name, params);
                ctx.tracer
                    .trace(format_args!("invoking '{}' with parameters {:?}", name, params));
                return command.run(ctx, params);
            }
            DispatchState::Rejected(name) => {
                log::debug!("'{}' is not in the command catalog", name);
                return Err(FrameworkError::UnknownCommand(name.to_string()).into());
            }
        };
    }
}
