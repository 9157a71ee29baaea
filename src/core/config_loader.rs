//! # Config Loader
//!
//! Locates and parses the optional `skel` TOML configuration. The first file
//! found wins: `$SKEL_CONFIG`, then `./.skel.toml`, then
//! `<config dir>/skel/config.toml`. A missing file is not an error; the
//! defaults apply. `SKEL_DEFAULT_COMMAND` overrides `default_command` last.
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME, DEFAULT_COMMAND, DEFAULT_COMMAND_ENV_VAR,
    DEFAULT_INSTALL_SHELL, DESCRIPTION_TERMINATOR, LOCAL_CONFIG_FILENAME,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Could not expand path '{0}': {1}")]
    PathExpansion(String, String),
}

/// Top-level settings, as read from the config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Command dispatched when the invocation names none.
    pub default_command: String,
    /// Options for the `install` command.
    pub install: InstallSettings,
    /// User-defined script commands, keyed by name.
    pub commands: BTreeMap<String, ScriptCommandConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_command: DEFAULT_COMMAND.to_string(),
            install: InstallSettings::default(),
            commands: BTreeMap::new(),
        }
    }
}

/// `[install]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InstallSettings {
    /// URL template; `{os}` is replaced by the target operating system.
    pub url: Option<String>,
    /// Interpreter the fetched script is piped to.
    pub shell: String,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            url: None,
            shell: DEFAULT_INSTALL_SHELL.to_string(),
        }
    }
}

/// One `[commands.<name>]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScriptCommandConfig {
    /// Command line to execute. Residual parameters are appended to it.
    pub run: String,
    /// Inline description shown by `help`.
    pub description: Option<String>,
    /// File holding the description, or `-` for standard input. Read up to
    /// `description_terminator`.
    pub description_file: Option<String>,
    /// Terminator line for `description_file`.
    #[serde(default = "default_terminator")]
    pub description_terminator: String,
}

fn default_terminator() -> String {
    DESCRIPTION_TERMINATOR.to_string()
}

/// Finds the config file to use, if any.
pub fn find_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
        // An explicit path is used even if it does not exist, so the read fails loudly.
        return Some(PathBuf::from(explicit));
    }

    if let Ok(cwd) = env::current_dir() {
        let local = cwd.join(LOCAL_CONFIG_FILENAME);
        if local.is_file() {
            return Some(local);
        }
    }

    let global = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME);
    global.is_file().then_some(global)
}

/// Loads the settings for this run.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let mut settings = match find_config_path() {
        Some(path) => load_settings_from(&path)?,
        None => {
            log::debug!("No config file found, using defaults.");
            Settings::default()
        }
    };

    if let Ok(command) = env::var(DEFAULT_COMMAND_ENV_VAR) {
        if !command.is_empty() {
            log::debug!("Default command overridden by {}: '{}'", DEFAULT_COMMAND_ENV_VAR, command);
            settings.default_command = command;
        }
    }

    Ok(settings)
}

/// Reads and parses one config file.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    log::debug!("Loading config from '{}'", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Parses settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Expands `~` and environment variables in a path taken from the config.
pub fn expand_path(template: &str) -> Result<PathBuf, ConfigError> {
    let expanded = shellexpand::full(template)
        .map_err(|e| ConfigError::PathExpansion(template.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
