//! Definition of the CLI arguments of the deploy script

use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::DeployConfig,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_COMPILE_COMMAND, DEFAULT_RPC},
    errors::ScriptError,
};

/// Compile and deploy the Vault and Factory contracts
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC)]
    pub rpc_url: String,

    /// Root of the contracts workspace
    #[arg(short, long, env = "CONTRACTS_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Compiled artifacts directory, defaults to `<workspace>/artifacts`
    #[arg(long, env = "ARTIFACTS_DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Command compiling the workspace
    #[arg(long, env = "COMPILE_COMMAND", default_value = DEFAULT_COMPILE_COMMAND)]
    pub compile_command: String,

    /// Write the deployed addresses to this JSON file
    #[arg(short, long, env = "DEPLOYMENT_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the arguments into a deploy config
    pub fn into_config(self) -> Result<DeployConfig, ScriptError> {
        let private_key = self.priv_key.ok_or(ScriptError::Config(String::from(
            "missing private key, set --priv-key or PRIVATE_KEY",
        )))?;
        let artifacts_dir = self
            .artifacts_dir
            .unwrap_or_else(|| self.workspace.join(DEFAULT_ARTIFACTS_DIR));

        DeployConfig::new(
            &self.rpc_url,
            private_key,
            self.workspace,
            artifacts_dir,
            &self.compile_command,
            self.output,
        )
    }
}
