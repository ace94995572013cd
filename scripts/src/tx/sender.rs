//! Transaction sending and confirmation

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    providers::Provider,
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use tracing::info;

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Send a contract creation and wait for it to be mined
pub async fn send_deploy_transaction(
    client: &RpcProvider,
    name: &str,
    code: Bytes,
    gas_limit: u128,
) -> Result<(Address, TxHash), ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .with_deploy_code(code)
        .with_gas_limit(gas_limit);

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(format!("{name}: {e}")))?;
    info!("Pending {name} deployment... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| e.to_string())
        .and_then(check_receipt)
        .map_err(|e| ScriptError::ContractDeployment(format!("{name}: {e}")))?;

    let address = deployed_address(&receipt, name)?;

    Ok((address, receipt.transaction_hash))
}

/// Send a call to a deployed contract and wait for it to be mined
pub async fn send_call_transaction(
    client: &RpcProvider,
    contract: Address,
    entry_point: &str,
    calldata: Bytes,
) -> Result<TxHash, ScriptError> {
    // Build the tx, gas is estimated by the client
    let tx_request = TransactionRequest::default()
        .to(contract)
        .with_input(calldata);

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(format!("{entry_point}: {e}")))?;
    info!(
        "Pending {entry_point} transaction... {}",
        pending_tx.tx_hash()
    );

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| e.to_string())
        .and_then(check_receipt)
        .map_err(|e| ScriptError::ContractInteraction(format!("{entry_point}: {e}")))?;

    Ok(receipt.transaction_hash)
}

/// Address of the contract created by a confirmed deployment
fn deployed_address(receipt: &TransactionReceipt, name: &str) -> Result<Address, ScriptError> {
    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "{name}: receipt {} has no contract address",
            receipt.transaction_hash
        ))
    })
}

/// Reject reverted transactions
fn check_receipt(receipt: TransactionReceipt) -> Result<TransactionReceipt, String> {
    if !receipt.status() {
        return Err(format!("transaction {} reverted", receipt.transaction_hash));
    }

    match receipt.block_number {
        Some(block) => info!("Tx {} done on block: {block}", receipt.transaction_hash),
        None => info!("Tx {} done", receipt.transaction_hash),
    }

    Ok(receipt)
}
