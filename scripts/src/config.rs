//! Explicit configuration handed to the deployer and the orchestrator

use std::{fmt, path::PathBuf};

use reqwest::Url;

use crate::{constants::DEFAULT_GAS_LIMIT, errors::ScriptError};

/// Everything a deployment run needs, resolved once at startup
#[derive(Clone)]
pub struct DeployConfig {
    /// JSON-RPC endpoint of the target chain
    pub rpc_url: Url,
    /// Hex encoded private key of the deployer
    pub private_key: String,
    /// Gas limit ceiling of each contract creation
    pub gas_limit: u128,
    /// Root of the contracts workspace, where the compile command runs
    pub workspace: PathBuf,
    /// Where the compile command writes its artifacts
    pub artifacts_dir: PathBuf,
    /// Compile command, program first
    pub compile_command: Vec<String>,
    /// Optional deployment report file
    pub output: Option<PathBuf>,
}

impl DeployConfig {
    /// Validate raw values into a config
    pub fn new(
        rpc_url: &str,
        private_key: String,
        workspace: PathBuf,
        artifacts_dir: PathBuf,
        compile_command: &str,
        output: Option<PathBuf>,
    ) -> Result<Self, ScriptError> {
        let rpc_url = rpc_url
            .parse::<Url>()
            .map_err(|e| ScriptError::Config(format!("invalid rpc url {rpc_url:?}: {e}")))?;

        let compile_command: Vec<String> = compile_command
            .split_whitespace()
            .map(String::from)
            .collect();
        if compile_command.is_empty() {
            return Err(ScriptError::Config(String::from("empty compile command")));
        }

        Ok(DeployConfig {
            rpc_url,
            private_key,
            gas_limit: DEFAULT_GAS_LIMIT,
            workspace,
            artifacts_dir,
            compile_command,
            output,
        })
    }
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("private_key", &"<redacted>")
            .field("gas_limit", &self.gas_limit)
            .field("workspace", &self.workspace)
            .field("artifacts_dir", &self.artifacts_dir)
            .field("compile_command", &self.compile_command)
            .field("output", &self.output)
            .finish()
    }
}
