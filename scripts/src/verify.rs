//! Source verification of deployed contracts on an Etherscan-compatible block explorer

use std::path::Path;

use alloy::primitives::Address;
use serde::Deserialize;
use tracing::info;

use crate::{artifacts::load_build_info, errors::ScriptError, types::Contract};

/// The code format under which Hardhat's standard JSON input is submitted
const STANDARD_JSON_CODE_FORMAT: &str = "solidity-standard-json-input";

/// The status the explorer API responds with on success
const STATUS_OK: &str = "1";

/// Connection details of the block explorer API
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// The API endpoint, e.g. `https://api.etherscan.io/v2/api`
    pub api_url: String,
    /// The API key
    pub api_key: String,
}

/// A `verifysourcecode` submission
#[derive(Debug)]
pub struct VerificationRequest {
    /// The chain the contract lives on
    pub chain_id: u64,
    /// The address of the deployed contract
    pub address: Address,
    /// The fully qualified name of the contract
    pub contract_name: String,
    /// The compiler version, in the explorer's `v0.8.21+commit.d9974bed` format
    pub compiler_version: String,
    /// The standard JSON input the contract was compiled from
    pub source_code: String,
    /// The hex-encoded constructor arguments, without `0x` prefix
    pub constructor_args: String,
}

impl VerificationRequest {
    /// Builds the verification request for a contract deployed from the given artifacts
    pub fn new(
        artifacts_dir: &Path,
        contract: Contract,
        chain_id: u64,
        address: Address,
        constructor_args: &[u8],
    ) -> Result<Self, ScriptError> {
        let build_info = load_build_info(artifacts_dir, contract)?;
        let source_code = serde_json::to_string(&build_info.input)
            .map_err(|e| ScriptError::Serde(e.to_string()))?;

        Ok(Self {
            chain_id,
            address,
            contract_name: contract.fully_qualified_name(),
            compiler_version: format!("v{}", build_info.solc_long_version),
            source_code,
            constructor_args: hex::encode(constructor_args),
        })
    }

    /// The form fields of the request, excluding the API key
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("contractaddress", format!("{:#x}", self.address)),
            ("sourceCode", self.source_code.clone()),
            ("codeformat", STANDARD_JSON_CODE_FORMAT.to_string()),
            ("contractname", self.contract_name.clone()),
            ("compilerversion", self.compiler_version.clone()),
            // Misspelling is part of the Etherscan API
            ("constructorArguements", self.constructor_args.clone()),
        ]
    }
}

/// The envelope of every explorer API response
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    /// `"1"` on success, `"0"` on failure
    status: String,
    /// The GUID of the verification job on success, a description of the error otherwise
    result: String,
}

/// Submits the contract for verification, returning the GUID of the verification job
pub async fn submit_verification(
    explorer: &ExplorerConfig,
    request: &VerificationRequest,
) -> Result<String, ScriptError> {
    let mut form = request.form_fields();
    form.push(("apikey", explorer.api_key.clone()));

    let response: ExplorerResponse = reqwest::Client::new()
        .post(&explorer.api_url)
        .query(&[("chainid", request.chain_id.to_string())])
        .form(&form)
        .send()
        .await
        .map_err(|e| ScriptError::Verification(e.to_string()))?
        .json()
        .await
        .map_err(|e| ScriptError::Verification(e.to_string()))?;

    if response.status != STATUS_OK {
        return Err(ScriptError::Verification(response.result));
    }

    info!(
        "Verification of {} at {:#x} submitted, job {}",
        request.contract_name, request.address, response.result
    );
    Ok(response.result)
}
