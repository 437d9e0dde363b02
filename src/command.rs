//! Subprocess helpers for CLI-based stores.

use crate::{Pif2PassError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Executes a command, writes `stdin_data` to its stdin, and returns stdout.
///
/// # Arguments
///
/// - `program`: Command to execute (e.g., "gopass", "pass")
/// - `args`: Command arguments
/// - `env`: Extra environment variables (e.g., `PASSWORD_STORE_DIR`)
/// - `stdin_data`: Payload written to the child's stdin
///
/// # Errors
///
/// Returns [`Pif2PassError::CommandFailed`] if the exit code is non-zero,
/// and [`Pif2PassError::StoreNotInstalled`] if the program cannot be found.
pub async fn run_command_with_stdin(
    program: &str,
    args: &[&str],
    env: &[(&str, &str)],
    stdin_data: &str,
) -> Result<String> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Pif2PassError::StoreNotInstalled(format!("{} command not found", program))
        } else {
            Pif2PassError::Io(e)
        }
    })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .await
            .map_err(Pif2PassError::Io)?;
        stdin.flush().await.map_err(Pif2PassError::Io)?;
        // Dropping stdin closes the pipe so the child sees EOF.
    }

    let output = child.wait_with_output().await.map_err(Pif2PassError::Io)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Pif2PassError::CommandFailed(format!(
            "{} failed with exit code {}: {}",
            program,
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| {
        Pif2PassError::Other(anyhow::anyhow!("Invalid UTF-8 in command output: {}", e))
    })
}

/// Checks if a command-line tool is available.
///
/// A program given as a path is checked on the filesystem, anything else is
/// looked up in `PATH`.
///
/// # Example
///
/// ```no_run
/// use pif2pass::command::check_command_exists;
///
/// #[tokio::main]
/// async fn main() -> pif2pass::Result<()> {
///     if !check_command_exists("gopass").await? {
///         println!("gopass is not installed");
///     }
///     Ok(())
/// }
/// ```
pub async fn check_command_exists(program: &str) -> Result<bool> {
    if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
        return Ok(Path::new(program).is_file());
    }

    let status = Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(Pif2PassError::Io)?;

    Ok(status.success())
}
