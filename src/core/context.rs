// src/core/context.rs

use super::catalog::CommandCatalog;
use super::config_loader::Settings;
use super::descriptions::DescriptionRegistry;
use super::registry::CommandRegistry;
use crate::system::diagnostics::Tracer;

/// Everything a run needs, built once at startup and passed down explicitly.
#[derive(Debug)]
pub struct AppContext {
    /// The program name as invoked (`argv[0]`).
    pub program: String,
    /// Settings loaded from the config file.
    pub settings: Settings,
    /// Help text per command name.
    pub descriptions: DescriptionRegistry,
    /// Every defined command, internal ones included.
    pub commands: CommandRegistry,
    /// Dispatchable names. Empty until `refresh_catalog` runs.
    pub catalog: CommandCatalog,
    /// The `--debug` trace facility.
    pub tracer: Tracer,
}

impl AppContext {
    /// Creates a context with no commands defined.
    pub fn new(program: impl Into<String>, settings: Settings, tracer: Tracer) -> Self {
        Self {
            program: program.into(),
            settings,
            descriptions: DescriptionRegistry::new(),
            commands: CommandRegistry::new(),
            catalog: CommandCatalog::default(),
            tracer,
        }
    }

    /// Rebuilds the catalog from the commands defined so far.
    pub fn refresh_catalog(&mut self) -> &CommandCatalog {
        self.catalog = CommandCatalog::build(&self.commands);
        &self.catalog
    }

    /// The file name part of `program`, for usage lines.
    pub fn display_name(&self) -> &str {
        std::path::Path::new(&self.program)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.program.as_str())
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::new("skel", Settings::default(), Tracer::disabled())
    }
}
