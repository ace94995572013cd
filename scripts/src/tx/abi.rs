//! Calldata encoding against the ABI shipped with each artifact

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::Bytes,
};

use crate::{deploy::ContractFactory, errors::ScriptError};

/// Creation code: the contract bytecode followed by its encoded constructor arguments
pub fn encode_deploy_code(
    factory: &ContractFactory,
    args: &[DynSolValue],
) -> Result<Bytes, ScriptError> {
    let mut code = factory.bytecode.to_vec();

    match factory.abi.constructor() {
        Some(constructor) => {
            let encoded = constructor.abi_encode_input(args).map_err(|e| {
                ScriptError::ContractDeployment(format!(
                    "bad constructor arguments for {}: {e}",
                    factory.name
                ))
            })?;
            code.extend_from_slice(&encoded);
        }
        None if args.is_empty() => {}
        None => {
            return Err(ScriptError::ContractDeployment(format!(
                "{} has no constructor but got {} arguments",
                factory.name,
                args.len()
            )))
        }
    }

    Ok(code.into())
}

/// Selector and arguments of a call to the entry point `name`
pub fn encode_entry_point_call(
    abi: &JsonAbi,
    name: &str,
    args: &[DynSolValue],
) -> Result<Bytes, ScriptError> {
    let function = abi
        .function(name)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == args.len()))
        .ok_or_else(|| {
            ScriptError::ContractInteraction(format!(
                "no entry point {name} taking {} arguments",
                args.len()
            ))
        })?;

    function
        .abi_encode_input(args)
        .map(Bytes::from)
        .map_err(|e| ScriptError::ContractInteraction(format!("bad arguments for {name}: {e}")))
}
