//! Definitions of errors that can occur during the execution of the deploy scripts

use thiserror::Error;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Invalid or missing configuration value
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Error when creating the client
    #[error("error during client init: {0}")]
    ClientInitialization(String),
    /// Error compiling the contracts workspace
    #[error("error compiling contract: {0}")]
    ContractCompilation(String),
    /// Error finding or parsing a compiled contract artifact
    #[error("error loading contract artifact: {0}")]
    ArtifactLoading(String),
    /// Error deploying a contract
    #[error("error deploying contract: {0}")]
    ContractDeployment(String),
    /// Error calling a contract method
    #[error("error interacting with contract: {0}")]
    ContractInteraction(String),
    /// Error when building output file
    #[error("error writing json output: {0}")]
    JsonOutputError(String),
}
