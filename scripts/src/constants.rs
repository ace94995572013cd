//! Constants used in the deploy scripts

/// Default RPC endpoint, a local development node
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Gas limit ceiling attached to every contract creation transaction
pub const DEFAULT_GAS_LIMIT: u128 = 5_000_000;

/// Command compiling the contracts workspace
pub const DEFAULT_COMPILE_COMMAND: &str = "npx hardhat compile";

/// Directory, relative to the workspace, holding the compiled artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Artifacts sub-directory holding compiler inputs, never contract artifacts
pub const BUILD_INFO_DIR: &str = "build-info";

/// Name of the vault contract
pub const VAULT_CONTRACT: &str = "Vault";

/// Name of the factory contract, parameterized by the vault address
pub const FACTORY_CONTRACT: &str = "Factory";

/// Entry point initializing the vault once deployed
pub const INITIALIZE_LOCK: &str = "initializeLock";
