use alloy::{dyn_abi::DynSolValue, primitives::TxHash};
use async_trait::async_trait;

use crate::{
    build::{ArtifactStore, ContractCompiler},
    config::DeployConfig,
    deploy::{ContractDeployer, ContractFactory, DeployedContract},
    errors::ScriptError,
    tx::{
        abi::{encode_deploy_code, encode_entry_point_call},
        client::{create_rpc_provider, RpcProvider},
        sender::{send_call_transaction, send_deploy_transaction},
    },
};

/// Deploys the artifacts of an external compiler through an RPC node
pub struct ArtifactDeployer {
    /// Compiles the workspace
    compiler: ContractCompiler,
    /// Where the compiled contracts are read from
    artifacts: ArtifactStore,
    /// Signing client sending the transactions
    client: RpcProvider,
}

impl ArtifactDeployer {
    /// Build the deployer, its client signing with the configured key
    pub fn from_config(config: &DeployConfig) -> Result<Self, ScriptError> {
        Ok(ArtifactDeployer {
            compiler: ContractCompiler::from_config(config),
            artifacts: ArtifactStore::new(config.artifacts_dir.clone()),
            client: create_rpc_provider(config)?,
        })
    }
}

#[async_trait]
impl ContractDeployer for ArtifactDeployer {
    async fn compile(&self) -> Result<(), ScriptError> {
        // The compile command blocks until the compiler exits
        let compiler = self.compiler.clone();
        tokio::task::spawn_blocking(move || compiler.compile())
            .await
            .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
    }

    async fn get_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        self.artifacts.load(name)
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: Vec<DynSolValue>,
        gas_limit: u128,
    ) -> Result<DeployedContract, ScriptError> {
        let code = encode_deploy_code(factory, &args)?;
        let (address, transaction_hash) =
            send_deploy_transaction(&self.client, &factory.name, code, gas_limit).await?;

        Ok(DeployedContract {
            name: factory.name.clone(),
            address,
            abi: factory.abi.clone(),
            transaction_hash,
        })
    }

    async fn call_entry_point(
        &self,
        contract: &DeployedContract,
        name: &str,
        args: Vec<DynSolValue>,
    ) -> Result<TxHash, ScriptError> {
        let calldata = encode_entry_point_call(&contract.abi, name, &args)?;
        send_call_transaction(&self.client, contract.address, name, calldata).await
    }
}
