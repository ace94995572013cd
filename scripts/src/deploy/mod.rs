//! Contract deployment: the collaborator seam and the orchestration on top of it

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{Address, Bytes, TxHash},
};
use async_trait::async_trait;

use crate::errors::ScriptError;

/// Deployer backed by compiled artifacts and an RPC node
mod artifact_deployer;
pub mod orchestrator;

pub use artifact_deployer::ArtifactDeployer;
pub use orchestrator::{run, DeploymentSummary};

/// A compiled contract, ready to be deployed
#[derive(Debug, Clone, PartialEq)]
pub struct ContractFactory {
    /// Contract name, as known by the compiler
    pub name: String,
    /// Contract ABI
    pub abi: JsonAbi,
    /// Creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractFactory {
    /// Size of the creation bytecode in bytes
    pub fn bytecode_size(&self) -> usize {
        self.bytecode.len()
    }
}

/// A contract whose creation transaction was confirmed
#[derive(Debug, Clone, PartialEq)]
pub struct DeployedContract {
    /// Contract name, as known by the compiler
    pub name: String,
    /// Address the contract lives at
    pub address: Address,
    /// Contract ABI, used to encode entry point calls
    pub abi: JsonAbi,
    /// Hash of the creation transaction
    pub transaction_hash: TxHash,
}

/// Compile, deploy and call contracts. Every method only returns once the
/// underlying work is done, for transactions once they are mined.
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Compile the contracts workspace
    async fn compile(&self) -> Result<(), ScriptError>;

    /// Get the factory of the compiled contract `name`
    async fn get_factory(&self, name: &str) -> Result<ContractFactory, ScriptError>;

    /// Deploy a contract with the given constructor arguments and gas limit
    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: Vec<DynSolValue>,
        gas_limit: u128,
    ) -> Result<DeployedContract, ScriptError>;

    /// Call the entry point `name` of a deployed contract
    async fn call_entry_point(
        &self,
        contract: &DeployedContract,
        name: &str,
        args: Vec<DynSolValue>,
    ) -> Result<TxHash, ScriptError>;
}
