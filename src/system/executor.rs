// EN: src/system/executor.rs

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus as ProcessStatus, Stdio};
use thiserror::Error;

use crate::ExitStatus;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Could not pass the script to '{shell}': {source}")]
    ScriptInput {
        shell: String,
        #[source]
        source: std::io::Error,
    },
}

/// Maps a finished child's status to the status we return. A child killed by a
/// signal has no code and counts as a plain failure.
fn status_code(status: ProcessStatus) -> ExitStatus {
    status.code().unwrap_or(1)
}

/// Runs a command line with `params` appended as extra arguments.
///
/// The line is split with shell-like quoting rules; no shell is involved.
/// Standard streams are inherited and the child's exit code is returned as-is,
/// so a failing child is a status, not an error.
pub fn execute_command(
    command_line: &str,
    params: &[String],
    cwd: &Path,
) -> Result<ExitStatus, ExecutionError> {
    let trimmed_command = command_line.trim();
    if trimmed_command.is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }

    let parts = shlex::split(trimmed_command)
        .ok_or_else(|| ExecutionError::CommandParse(trimmed_command.to_string()))?;
    let (program, args) = parts.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let clean_cwd = dunce::simplified(cwd);

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .args(params)
        .current_dir(clean_cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    // Fallback logic for Windows built-in commands like `echo`.
    // We try to spawn directly first. If it fails with `NotFound`, we try with `cmd /C`.
    let status = match command.status() {
        Ok(status) => status,
        Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
            log::debug!("Command '{}' not found. Retrying with cmd /C.", program);
            StdCommand::new("cmd")
                .arg("/C")
                .arg(trimmed_command)
                .args(params)
                .current_dir(clean_cwd)
                .status()
                .map_err(|e| ExecutionError::CommandFailed(trimmed_command.to_string(), e))?
        }
        Err(e) => {
            return Err(ExecutionError::CommandFailed(
                trimmed_command.to_string(),
                e,
            ));
        }
    };

    log::debug!("'{}' exited with {}", trimmed_command, status);
    Ok(status_code(status))
}

/// Pipes `script` into `shell -s -- <args>` and waits for it to finish.
///
/// Stdout and stderr are inherited. The shell's exit code is returned unchanged.
pub fn run_script(shell: &str, script: &str, args: &[String]) -> Result<ExitStatus, ExecutionError> {
    let mut child = StdCommand::new(shell)
        .arg("-s")
        .arg("--")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| ExecutionError::CommandFailed(shell.to_string(), e))?;

    // The stdin handle is dropped at the end of this block so the shell sees EOF.
    {
        let mut stdin = child.stdin.take().ok_or_else(|| ExecutionError::ScriptInput {
            shell: shell.to_string(),
            source: std::io::Error::new(ErrorKind::BrokenPipe, "stdin was not captured"),
        })?;
        if let Err(source) = stdin.write_all(script.as_bytes()) {
            // The shell may exit before reading everything; its status is still meaningful.
            if source.kind() != ErrorKind::BrokenPipe {
                return Err(ExecutionError::ScriptInput {
                    shell: shell.to_string(),
                    source,
                });
            }
            log::warn!("'{}' closed its input before the whole script was written.", shell);
        }
    }

    let status = child
        .wait()
        .map_err(|e| ExecutionError::CommandFailed(shell.to_string(), e))?;
    log::debug!("'{}' exited with {}", shell, status);
    Ok(status_code(status))
}
