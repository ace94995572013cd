//! JSON deployment report

use std::{fmt::LowerHex, fs, path::Path};

use serde_json::{json, Value};

use crate::{
    constants::{FACTORY_CONTRACT, VAULT_CONTRACT},
    deploy::DeploymentSummary,
    errors::ScriptError,
};

/// Entry of the report, per contract
pub enum OutputKeys {
    /// Address a contract was deployed to
    Deployment {
        /// Contract name
        key: &'static str,
    },
    /// Transaction initializing a contract
    Init {
        /// Contract name
        key: &'static str,
    },
}

/// Record a whole successful run
pub fn write_deployment_summary(
    file_path: &Path,
    summary: &DeploymentSummary,
) -> Result<(), ScriptError> {
    write_output_file(
        file_path,
        OutputKeys::Deployment { key: VAULT_CONTRACT },
        summary.vault,
    )?;
    write_output_file(
        file_path,
        OutputKeys::Init { key: VAULT_CONTRACT },
        summary.init_transaction,
    )?;
    write_output_file(
        file_path,
        OutputKeys::Deployment {
            key: FACTORY_CONTRACT,
        },
        summary.factory,
    )
}

/// Writes the given value under its key, keeping the rest of the file
pub fn write_output_file<T: LowerHex>(
    file_path: &Path,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    let mut parsed_json = if file_path.exists() {
        get_json_from_file(file_path)?
    } else {
        json!({})
    };
    let root = parsed_json.as_object_mut().ok_or_else(|| {
        ScriptError::JsonOutputError(format!("{} is not a json object", file_path.display()))
    })?;

    let (contract, field) = match key {
        OutputKeys::Deployment { key } => (key, "deploy"),
        OutputKeys::Init { key } => (key, "init"),
    };
    let entry = root.entry(contract).or_insert_with(|| json!({}));
    if !entry.is_object() {
        *entry = json!({});
    }
    entry[field] = Value::String(format!("{value:#x}"));

    let pretty = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    fs::write(file_path, pretty).map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &Path) -> Result<Value, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    serde_json::from_str(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}
