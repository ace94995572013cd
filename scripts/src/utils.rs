//! Utilities for the deploy scripts.

use std::process::Command;

use tracing::info;

use crate::errors::ScriptError;

/// Executes a command, returning a compilation error if the command fails
pub fn command_success_or(mut cmd: Command, err_msg: &str) -> Result<(), ScriptError> {
    info!("Running command: {:?}", cmd);
    let status = cmd
        .status()
        .map_err(|e| ScriptError::ContractCompilation(format!("{err_msg}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(ScriptError::ContractCompilation(format!(
            "{err_msg} ({status})"
        )))
    }
}
