// src/core/descriptions.rs

use std::collections::HashMap;
use std::io::BufRead;

use anyhow::{Context, Result};

use super::errors::FrameworkError;

/// Usage/description text per command name.
///
/// Entries are written while commands are being registered and read by `help`.
/// Re-registering a name overwrites its text.
#[derive(Debug, Default, Clone)]
pub struct DescriptionRegistry {
    entries: HashMap<String, String>,
}

impl DescriptionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` as the description of `name`.
    ///
    /// # Errors
    /// Returns `FrameworkError::Usage` if `name` is empty.
    pub fn register(&mut self, name: &str, text: impl Into<String>) -> Result<(), FrameworkError> {
        if name.is_empty() {
            return Err(FrameworkError::Usage(
                "a command name is required to register a description".to_string(),
            ));
        }
        log::debug!("Registering description for '{}'", name);
        self.entries.insert(name.to_string(), text.into());
        Ok(())
    }

    /// Stores the description of `name` by draining `reader` up to a line equal
    /// to `terminator`. End of input acts as the terminator.
    ///
    /// # Errors
    /// Returns a usage error if `name` is empty, or an I/O error if the
    /// reader itself fails. A missing terminator is not an error.
    pub fn register_from_reader<R: BufRead>(
        &mut self,
        name: &str,
        reader: R,
        terminator: &str,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(FrameworkError::Usage(
                "a command name is required to register a description".to_string(),
            )
            .into());
        }

        let mut lines = Vec::new();
        for line in reader.lines() {
            let line =
                line.with_context(|| format!("Failed to read description for '{}'", name))?;
            let line = line.trim_end_matches('\r');
            if line == terminator {
                break;
            }
            lines.push(line.to_string());
        }

        self.register(name, lines.join("\n"))?;
        Ok(())
    }

    /// Returns the description of `name`, or a fallback message naming it.
    pub fn describe(&self, name: &str) -> String {
        match self.entries.get(name) {
            Some(text) => text.clone(),
            None => format!("No description available for '{}'.", name),
        }
    }

    /// First non-empty line of the description of `name`, if one is registered.
    pub fn summary(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)?
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }

    /// Whether a description is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_register_then_describe_round_trip() {
        let mut registry = DescriptionRegistry::new();
        registry.register("x", "d").unwrap();
        assert_eq!(registry.describe("x"), "d");
    }

    #[test]
    fn test_describe_unknown_name_falls_back() {
        let registry = DescriptionRegistry::new();
        let text = registry.describe("nonexistent");
        assert!(text.contains("nonexistent"));
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn test_register_overwrites_previous_entry() {
        let mut registry = DescriptionRegistry::new();
        registry.register("greet", "old").unwrap();
        registry.register("greet", "new").unwrap();
        assert_eq!(registry.describe("greet"), "new");
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = DescriptionRegistry::new();
        let err = registry.register("", "text").unwrap_err();
        assert!(matches!(err, FrameworkError::Usage(_)));

        let err = registry
            .register_from_reader("", Cursor::new("text"), "EOF")
            .unwrap_err();
        assert!(err.downcast_ref::<FrameworkError>().is_some());
    }

    #[test]
    fn test_reader_stops_at_terminator() {
        let mut registry = DescriptionRegistry::new();
        let input = "Deploy the app.\r\n\r\nUsage: skel deploy\r\nEOF\r\nignored\n";
        registry
            .register_from_reader("deploy", Cursor::new(input), "EOF")
            .unwrap();
        assert_eq!(registry.describe("deploy"), "Deploy the app.\n\nUsage: skel deploy");
    }

    #[test]
    fn test_reader_without_terminator_keeps_everything() {
        let mut registry = DescriptionRegistry::new();
        registry
            .register_from_reader("deploy", Cursor::new("line one\nline two\n"), "END")
            .unwrap();
        assert_eq!(registry.describe("deploy"), "line one\nline two");
    }

    #[test]
    fn test_summary_skips_leading_blank_lines() {
        let mut registry = DescriptionRegistry::new();
        registry
            .register("greet", "\n  Print a greeting.  \n\nUsage: skel greet")
            .unwrap();
        assert_eq!(registry.summary("greet"), Some("Print a greeting."));
        assert_eq!(registry.summary("missing"), None);
    }
}
