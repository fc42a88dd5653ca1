//! Execution of the configured assemble command.

use crate::error::{LicsyncError, Result};
use log::info;
use std::path::Path;
use std::process::Command;

/// Parse and run the assemble command in the project root.
///
/// Uses shell-words to parse the command into an argv array for deterministic
/// execution without invoking a shell. Output is inherited so the build
/// shows up in the terminal as it runs.
pub fn run_assemble_command(assemble_command: &str, project_root: &Path) -> Result<()> {
    let args = shell_words::split(assemble_command).map_err(|e| {
        LicsyncError::ConfigurationError(format!(
            "failed to parse assemble_command '{}': {}\n\n\
             Fix: check for unmatched quotes or invalid escape sequences in assemble_command.",
            assemble_command, e
        ))
    })?;

    let Some((program, cmd_args)) = args.split_first() else {
        return Err(LicsyncError::ConfigurationError(
            "assemble_command is empty after parsing.\n\n\
             Fix: provide a command or remove assemble_command from the config."
                .to_string(),
        ));
    };

    info!("running {}", assemble_command);
    let status = Command::new(program)
        .args(cmd_args)
        .current_dir(project_root)
        .status()
        .map_err(|e| {
            LicsyncError::BuildError(format!(
                "failed to execute assemble_command '{}': {}\n\n\
                 Fix: ensure the command is installed and in PATH.",
                assemble_command, e
            ))
        })?;

    if !status.success() {
        let code = status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none (terminated by signal)".to_string());
        return Err(LicsyncError::BuildError(format!(
            "'{}' exited with code {}",
            assemble_command, code
        )));
    }

    Ok(())
}
