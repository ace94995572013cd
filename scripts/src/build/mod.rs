//! Compile the contracts workspace and load what it produced

pub mod artifacts;
pub mod compiler;

pub use artifacts::ArtifactStore;
pub use compiler::ContractCompiler;
