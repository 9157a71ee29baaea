// src/constants.rs

/// Program name used when the process was started without an `argv[0]`.
pub const PROGRAM_NAME: &str = "skel";

/// Command dispatched when the invocation names none.
pub const DEFAULT_COMMAND: &str = "help";

/// Names starting with this prefix are internal and never dispatchable.
pub const RESERVED_PREFIX: &str = "_";

/// Names of the framework's own primitives. They never appear in the catalog.
pub const RESERVED_NAMES: &[&str] = &["describe", "trace", "fatal"];

/// Default terminator line for descriptions read from a stream.
pub const DESCRIPTION_TERMINATOR: &str = "EOF";

/// `description_file` value that reads the description from standard input.
pub const STDIN_DESCRIPTION_SOURCE: &str = "-";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SKEL_CONFIG";

/// Environment variable overriding `default_command`.
pub const DEFAULT_COMMAND_ENV_VAR: &str = "SKEL_DEFAULT_COMMAND";

/// Project-local config file, looked up in the current directory.
pub const LOCAL_CONFIG_FILENAME: &str = ".skel.toml";

/// Name of the directory inside the system config dir (`~/.config/skel`).
pub const CONFIG_DIR_NAME: &str = "skel";

/// Name of the global config file inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Interpreter the `install` script is piped to when none is configured.
pub const DEFAULT_INSTALL_SHELL: &str = "sh";

/// Placeholder replaced by the target operating system in install URLs.
pub const OS_PLACEHOLDER: &str = "{os}";

/// Width of the separator line printed after each trace message.
pub const TRACE_SEPARATOR_WIDTH: usize = 40;
