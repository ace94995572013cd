//! Everything talking to the chain: client, calldata encoding, sending

pub mod abi;
pub mod client;
pub mod sender;
