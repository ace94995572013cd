//! Compiled contract artifacts

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;
use tracing::debug;

use crate::{constants::BUILD_INFO_DIR, deploy::ContractFactory, errors::ScriptError};

/// The parts of a compiler artifact we need to deploy a contract
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompiledArtifact {
    /// Name of the contract
    contract_name: String,
    /// Contract ABI
    abi: JsonAbi,
    /// Creation bytecode
    bytecode: Bytes,
}

/// Read access to the artifacts directory written by the compile step
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Root of the artifacts directory
    dir: PathBuf,
}

impl ArtifactStore {
    /// Read artifacts from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ArtifactStore { dir: dir.into() }
    }

    /// Load the factory of the contract `name`
    pub fn load(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        let path = self.find(name)?;
        debug!("Loading artifact {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| {
            ScriptError::ArtifactLoading(format!("{}: {e}", path.display()))
        })?;
        let artifact: CompiledArtifact = serde_json::from_str(&content).map_err(|e| {
            ScriptError::ArtifactLoading(format!("{}: {e}", path.display()))
        })?;

        if artifact.contract_name != name {
            return Err(ScriptError::ArtifactLoading(format!(
                "{} holds contract {}, expected {name}",
                path.display(),
                artifact.contract_name
            )));
        }
        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactLoading(format!(
                "{name} has no bytecode, it is abstract or an interface"
            )));
        }

        Ok(ContractFactory {
            name: artifact.contract_name,
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        })
    }

    /// Find the single artifact file of the contract `name`
    fn find(&self, name: &str) -> Result<PathBuf, ScriptError> {
        let file_name = format!("{name}.json");
        let mut found = Vec::new();
        collect_artifacts(&self.dir, &file_name, &mut found).map_err(|e| {
            ScriptError::ArtifactLoading(format!("{}: {e}", self.dir.display()))
        })?;

        match found.len() {
            0 => Err(ScriptError::ArtifactLoading(format!(
                "no artifact for {name} under {}",
                self.dir.display()
            ))),
            1 => Ok(found.remove(0)),
            _ => Err(ScriptError::ArtifactLoading(format!(
                "several artifacts named {name}: {found:?}"
            ))),
        }
    }
}

/// Recursively collect files named `file_name`, skipping build info
fn collect_artifacts(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|n| n == BUILD_INFO_DIR) {
                continue;
            }
            collect_artifacts(&path, file_name, found)?;
        } else if path.file_name().is_some_and(|n| n == file_name) {
            found.push(path);
        }
    }

    Ok(())
}
