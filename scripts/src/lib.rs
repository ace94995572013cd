//! Scripts for compiling, deploying and initializing the Vault and Factory contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod utils;

/// Our build utils
pub mod build;

/// Our deploy utils
pub mod deploy;

// Our output utils
pub mod output_writer;

pub mod tx;
