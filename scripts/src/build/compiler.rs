//! The compile step

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use tracing::info;

use crate::{config::DeployConfig, errors::ScriptError, utils::command_success_or};

/// Runs the external compile command inside the contracts workspace
#[derive(Debug, Clone)]
pub struct ContractCompiler {
    /// Working directory of the compile command
    workspace: PathBuf,
    /// Program followed by its arguments
    command: Vec<String>,
}

impl ContractCompiler {
    /// Build a compiler from the deploy config
    pub fn from_config(config: &DeployConfig) -> Self {
        ContractCompiler {
            workspace: config.workspace.clone(),
            command: config.compile_command.clone(),
        }
    }

    /// Full compilation of the workspace
    pub fn compile(&self) -> Result<(), ScriptError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(ScriptError::Config(String::from("empty compile command")))?;

        if !self.workspace.is_dir() {
            return Err(ScriptError::ContractCompilation(format!(
                "Could not find contracts workspace {}",
                self.workspace.display()
            )));
        }

        let mut build_cmd = Command::new(program);
        build_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        // Run from the workspace root
        build_cmd.current_dir(&self.workspace);
        build_cmd.args(args);

        command_success_or(build_cmd, "Failed to compile contracts workspace")?;
        info!("Compiled {}", self.workspace.display());

        Ok(())
    }
}
