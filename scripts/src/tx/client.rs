//! Signing RPC client

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::Client;
use tracing::info;

use crate::{config::DeployConfig, errors::ScriptError};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a local private key to sign transactions
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Parse a hex encoded private key, with or without its `0x` prefix
pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, ScriptError> {
    let raw = hex::decode(private_key.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ClientInitialization(format!("malformed private key: {e}")))?;
    if raw.len() != 32 {
        return Err(ScriptError::ClientInitialization(format!(
            "private key must be 32 bytes, got {}",
            raw.len()
        )));
    }

    PrivateKeySigner::from_bytes(&B256::from_slice(&raw))
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Build our RPC client, the signer filling in nonce, gas and chain id.
/// No request is sent until the first transaction.
pub fn create_rpc_provider(config: &DeployConfig) -> Result<RpcProvider, ScriptError> {
    let signer = parse_signer(&config.private_key)?;
    info!("Deploying from {}", signer.address());

    let wallet = EthereumWallet::from(signer);

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(config.rpc_url.clone());

    Ok(provider)
}
