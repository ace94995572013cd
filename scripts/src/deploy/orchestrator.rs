//! The deployment sequence: compile, Vault, `initializeLock`, then Factory

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, TxHash},
};
use tracing::info;

use crate::{
    constants::{FACTORY_CONTRACT, INITIALIZE_LOCK, VAULT_CONTRACT},
    deploy::{ContractDeployer, DeployedContract},
    errors::ScriptError,
};

/// What a successful run left on chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentSummary {
    /// Address of the vault
    pub vault: Address,
    /// The `initializeLock` transaction
    pub init_transaction: TxHash,
    /// Address of the factory
    pub factory: Address,
}

/// Compile then deploy everything, each step waiting for the previous one to
/// be confirmed. The first error aborts the run, nothing already deployed is
/// rolled back.
pub async fn run<D>(deployer: &D, gas_limit: u128) -> Result<DeploymentSummary, ScriptError>
where
    D: ContractDeployer + ?Sized,
{
    info!("Building contracts...");
    deployer.compile().await?;
    info!("Built with success");

    let vault = deploy(deployer, VAULT_CONTRACT, vec![], gas_limit).await?;

    info!("Performing {INITIALIZE_LOCK} call...");
    let init_transaction = deployer
        .call_entry_point(&vault, INITIALIZE_LOCK, vec![])
        .await?;

    // The factory needs the vault address, so it can only come now
    let factory = deploy(
        deployer,
        FACTORY_CONTRACT,
        vec![DynSolValue::Address(vault.address)],
        gas_limit,
    )
    .await?;

    Ok(DeploymentSummary {
        vault: vault.address,
        init_transaction,
        factory: factory.address,
    })
}

/// Deploy a single contract, logging its size and address
async fn deploy<D>(
    deployer: &D,
    name: &str,
    args: Vec<DynSolValue>,
    gas_limit: u128,
) -> Result<DeployedContract, ScriptError>
where
    D: ContractDeployer + ?Sized,
{
    let factory = deployer.get_factory(name).await?;
    info!("{name} contract size: {} bytes", factory.bytecode_size());

    let contract = deployer.deploy(&factory, args, gas_limit).await?;
    info!("{name} deployed to: {}", contract.address);

    Ok(contract)
}
