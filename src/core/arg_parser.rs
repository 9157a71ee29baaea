// src/core/arg_parser.rs

use std::ffi::OsString;

use crate::constants::PROGRAM_NAME;
use crate::core::errors::FrameworkError;

/// A global flag recognized by the normalizer, wherever it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlobalFlag {
    Help,
    Version,
    Debug,
}

impl GlobalFlag {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-h" | "--help" => Some(Self::Help),
            "--version" => Some(Self::Version),
            "--debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// The result of normalizing the raw process arguments.
///
/// Addressing convention: `command_argv()[0]` is always the program name and
/// `command_parameters()` is `command_argv()[1..]`, so parameter `0` is
/// `command_argv()[1]`. Commands only ever see the parameter slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    command_name: Option<String>,
    command_argv: Vec<String>,
    debug_enabled: bool,
}

impl ParsedInvocation {
    /// Scans the raw argument list once, left to right.
    ///
    /// # Logic:
    /// - `-h`/`--help` and `--version` set the command name to `help` and
    ///   `version`; the last one seen wins. `--debug` enables tracing. None of
    ///   them is ever placed into the residual parameters.
    /// - The first other token becomes the command name. Every later token is
    ///   appended to the residual parameters, in order.
    /// - Unknown flags are not errors here; they are ordinary tokens.
    pub fn parse<I, S>(raw_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = raw_args.into_iter().map(Into::into);
        let program = tokens.next().unwrap_or_else(|| PROGRAM_NAME.to_string());

        let mut command_name: Option<String> = None;
        let mut command_argv = vec![program];
        let mut debug_enabled = false;

        for token in tokens {
            match GlobalFlag::from_token(&token) {
                Some(GlobalFlag::Help) => command_name = Some("help".to_string()),
                Some(GlobalFlag::Version) => command_name = Some("version".to_string()),
                Some(GlobalFlag::Debug) => debug_enabled = true,
                None if command_name.is_none() => command_name = Some(token),
                None => command_argv.push(token),
            }
        }

        Self {
            command_name,
            command_argv,
            debug_enabled,
        }
    }

    /// Like `parse`, for raw process arguments that may not be valid UTF-8.
    ///
    /// # Errors
    /// Returns `FrameworkError::Usage` naming the first token that is not
    /// valid UTF-8. Nothing is parsed in that case.
    pub fn from_os_args<I>(raw_args: I) -> Result<Self, FrameworkError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let tokens = raw_args
            .into_iter()
            .map(|token| {
                token.into_string().map_err(|raw| {
                    FrameworkError::Usage(format!("argument {:?} is not valid UTF-8", raw))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::parse(tokens))
    }

    /// The command named on the command line, if any. Empty tokens count as none.
    pub fn command_name(&self) -> Option<&str> {
        self.command_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Resolves the command name, falling back to `default` when none was given.
    pub fn resolve_command_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.command_name().unwrap_or(default)
    }

    /// Program name followed by every residual token.
    pub fn command_argv(&self) -> &[String] {
        &self.command_argv
    }

    /// `command_argv()` without its first element, order preserved.
    pub fn command_parameters(&self) -> &[String] {
        self.command_argv.split_first().map_or(&[], |(_, rest)| rest)
    }

    /// The program name as invoked (`argv[0]`).
    pub fn program(&self) -> &str {
        self.command_argv
            .first()
            .map_or(PROGRAM_NAME, String::as_str)
    }

    /// Whether `--debug` appeared anywhere in the invocation.
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_token_becomes_command_name() {
        let parsed = ParsedInvocation::parse(["prog", "greet", "Ada", "Hi"]);
        assert_eq!(parsed.command_name(), Some("greet"));
        assert_eq!(parsed.command_argv(), ["prog", "Ada", "Hi"]);
        assert_eq!(parsed.command_parameters(), ["Ada", "Hi"]);
        assert!(!parsed.debug_enabled());
    }

    #[test]
    fn test_program_name_stays_first_after_leading_flags() {
        let parsed = ParsedInvocation::parse(["prog", "--debug", "--debug", "greet", "x"]);
        assert_eq!(parsed.program(), "prog");
        assert_eq!(parsed.command_argv(), ["prog", "x"]);
        assert_eq!(parsed.command_name(), Some("greet"));
    }

    #[test]
    fn test_debug_help_commands_scenario() {
        let parsed = ParsedInvocation::parse(["prog", "--debug", "help", "commands"]);
        assert_eq!(parsed.command_name(), Some("help"));
        assert_eq!(parsed.command_parameters(), ["commands"]);
        assert!(parsed.debug_enabled());
    }

    #[test]
    fn test_help_flag_sets_command_and_keeps_positional_tokens() {
        let parsed = ParsedInvocation::parse(["prog", "-h", "install"]);
        assert_eq!(parsed.command_name(), Some("help"));
        assert_eq!(parsed.command_parameters(), ["install"]);
    }

    #[test]
    fn test_last_of_help_and_version_wins() {
        let parsed = ParsedInvocation::parse(["prog", "--help", "--version"]);
        assert_eq!(parsed.command_name(), Some("version"));

        let parsed = ParsedInvocation::parse(["prog", "--version", "-h"]);
        assert_eq!(parsed.command_name(), Some("help"));
        assert!(parsed.command_parameters().is_empty());
    }

    #[test]
    fn test_global_flags_are_never_residual() {
        let parsed = ParsedInvocation::parse(["prog", "install", "linux", "--debug"]);
        assert_eq!(parsed.command_name(), Some("install"));
        assert_eq!(parsed.command_parameters(), ["linux"]);
        assert!(parsed.debug_enabled());
    }

    #[test]
    fn test_unknown_flags_pass_through() {
        let parsed = ParsedInvocation::parse(["prog", "--dry-run", "install", "-x"]);
        assert_eq!(parsed.command_name(), Some("--dry-run"));
        assert_eq!(parsed.command_parameters(), ["install", "-x"]);
    }

    #[test]
    fn test_no_arguments_resolves_to_default() {
        let parsed = ParsedInvocation::parse(["prog"]);
        assert_eq!(parsed.command_name(), None);
        assert_eq!(parsed.resolve_command_name("help"), "help");
        assert_eq!(parsed.command_argv(), ["prog"]);
        assert!(parsed.command_parameters().is_empty());
    }

    #[test]
    fn test_empty_raw_args_use_builtin_program_name() {
        let parsed = ParsedInvocation::parse(Vec::<String>::new());
        assert_eq!(parsed.program(), PROGRAM_NAME);
        assert_eq!(parsed.command_argv().len(), 1);
    }

    #[test]
    fn test_empty_command_token_counts_as_missing() {
        let parsed = ParsedInvocation::parse(["prog", ""]);
        assert_eq!(parsed.resolve_command_name("version"), "version");
    }

    #[test]
    fn test_os_args_parse_like_strings() {
        let raw = ["prog", "--debug", "greet", "Ada"].map(OsString::from);
        let parsed = ParsedInvocation::from_os_args(raw).unwrap();
        assert_eq!(parsed, ParsedInvocation::parse(["prog", "--debug", "greet", "Ada"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_a_usage_error() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![
            OsString::from("prog"),
            OsString::from("greet"),
            OsString::from_vec(b"caf\xe9".to_vec()),
        ];
        let err = ParsedInvocation::from_os_args(raw).unwrap_err();
        assert!(matches!(err, FrameworkError::Usage(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
