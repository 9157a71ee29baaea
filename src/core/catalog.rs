// src/core/catalog.rs

use std::collections::BTreeSet;

use super::registry::CommandRegistry;
use crate::constants::{RESERVED_NAMES, RESERVED_PREFIX};

/// Returns `true` if `name` belongs to the framework and must never be dispatched.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX) || RESERVED_NAMES.contains(&name)
}

/// The set of command names eligible for dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    names: BTreeSet<String>,
}

impl CommandCatalog {
    /// Builds the catalog from every command currently defined in `registry`,
    /// dropping internal-prefixed and reserved names.
    ///
    /// Building twice from the same registry yields the same catalog.
    pub fn build(registry: &CommandRegistry) -> Self {
        let names: BTreeSet<String> = registry
            .names()
            .filter(|name| {
                let reserved = is_reserved(name);
                if reserved {
                    log::debug!("Excluding reserved command '{}' from the catalog", name);
                }
                !reserved
            })
            .map(str::to_string)
            .collect();

        log::debug!("Command catalog built with {} entries", names.len());
        Self { names }
    }

    /// Membership test used by the dispatcher.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Catalog names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of dispatchable commands.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no command is dispatchable.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
