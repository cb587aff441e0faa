//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::{Ethereum, EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_contract::{CallBuilder, CallDecoder};
use json::JsonValue;

use crate::{
    constants::{BENEFICIARY, DEPLOYMENTS_KEY, LOCAL_CHAIN_ID, NUM_CONFIRMATIONS},
    errors::ScriptError,
};

/// The provider type used by the scripts, carrying the deployer's wallet
pub type Wallet = DynProvider<Ethereum>;

/// The call builder type for contract calls made by the scripts
pub type ScriptCallBuilder<'a, C> = CallBuilder<(), &'a Wallet, C, Ethereum>;

/// Sets up a provider signing with the given private key against the given RPC url,
/// returning it along with the deployer's address
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<(Wallet, Address), ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    Ok((DynProvider::new(provider), deployer))
}

/// Whether the chain ID belongs to a local Hardhat / Anvil node
pub fn is_local_chain(chain_id: u64) -> bool {
    chain_id == LOCAL_CHAIN_ID
}

/// The royalty recipient of the collections, falling back to the deployer
/// when no beneficiary is configured
pub fn royalty_recipient(beneficiary: &str, deployer: Address) -> Result<Address, ScriptError> {
    if beneficiary.is_empty() {
        return Ok(deployer);
    }

    Address::from_str(beneficiary).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// The royalty recipient configured for this deployment
pub fn configured_royalty_recipient(deployer: Address) -> Result<Address, ScriptError> {
    royalty_recipient(BENEFICIARY, deployer)
}

// ---------------
// | Deployments |
// ---------------

/// Parses the JSON document at `file_path`
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| ScriptError::ReadFile(format!("{file_path}: {e}")))?;
    json::parse(&contents).map_err(|e| ScriptError::ReadFile(format!("{file_path}: {e}")))
}

/// Looks up the address recorded under `deployments.<contract_key>`.
///
/// Fails if the contract was never deployed with this deployments file.
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let deployments = get_json_from_file(file_path)?;
    let addr = deployments[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadFile(format!("no `{contract_key}` deployment in {file_path}"))
        })?;

    Address::from_str(addr)
        .map_err(|e| ScriptError::ReadFile(format!("bad `{contract_key}` address: {e}")))
}

/// Records `address` under `deployments.<contract_key>`, keeping every other
/// entry. A missing file is created.
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = if Path::new(file_path).exists() {
        get_json_from_file(file_path)?
    } else {
        JsonValue::new_object()
    };

    deployments[DEPLOYMENTS_KEY][contract_key] = JsonValue::from(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(deployments, 4))
        .map_err(|e| ScriptError::WriteFile(format!("{file_path}: {e}")))
}

// ----------------
// | Transactions |
// ----------------

/// Deploys the given creation code, waiting for the deployment to be confirmed,
/// and returns the address of the new contract
pub async fn deploy_bytecode(
    client: &Wallet,
    bytecode: &[u8],
    constructor_args: &[u8],
) -> Result<Address, ScriptError> {
    let mut creation_code = bytecode.to_vec();
    creation_code.extend_from_slice(constructor_args);

    let tx = TransactionRequest::default().with_deploy_code(Bytes::from(creation_code));
    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(NUM_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deployment transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    receipt
        .contract_address
        .ok_or_else(|| ScriptError::ContractDeployment("receipt has no contract address".into()))
}

/// Sends a contract call and waits for it to be confirmed, failing if it reverted
pub async fn send_tx<C: CallDecoder>(
    tx: ScriptCallBuilder<'_, C>,
) -> Result<TransactionReceipt, ScriptError> {
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .with_required_confirmations(NUM_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;
    use tempfile::tempdir;

    use super::{
        get_json_from_file, is_local_chain, parse_addr_from_deployments_file, royalty_recipient,
        write_deployed_address,
    };

    #[test]
    fn test_deployments_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let roadmap = Address::repeat_byte(0x11);
        let catalog = Address::repeat_byte(0x22);
        write_deployed_address(path, "roadmap_contract", roadmap).unwrap();
        write_deployed_address(path, "catalog_contract", catalog).unwrap();

        assert_eq!(
            parse_addr_from_deployments_file(path, "roadmap_contract").unwrap(),
            roadmap
        );
        assert_eq!(
            parse_addr_from_deployments_file(path, "catalog_contract").unwrap(),
            catalog
        );

        let parsed = get_json_from_file(path).unwrap();
        assert_eq!(
            parsed["deployments"]["roadmap_contract"].as_str(),
            Some("0x1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn test_redeploy_overwrites_address() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        write_deployed_address(path, "roadmap_contract", Address::repeat_byte(0x11)).unwrap();
        write_deployed_address(path, "roadmap_contract", Address::repeat_byte(0x33)).unwrap();

        assert_eq!(
            parse_addr_from_deployments_file(path, "roadmap_contract").unwrap(),
            Address::repeat_byte(0x33)
        );
    }

    #[test]
    fn test_missing_deployment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        assert!(parse_addr_from_deployments_file(path, "roadmap_contract").is_err());

        write_deployed_address(path, "catalog_contract", Address::repeat_byte(0x22)).unwrap();
        assert!(parse_addr_from_deployments_file(path, "roadmap_contract").is_err());
    }

    #[test]
    fn test_royalty_recipient() {
        let deployer = Address::repeat_byte(0x01);
        assert_eq!(royalty_recipient("", deployer).unwrap(), deployer);

        let multisig = "0x00000000000000000000000000000000000000aa";
        assert_eq!(
            royalty_recipient(multisig, deployer).unwrap(),
            multisig.parse::<Address>().unwrap()
        );
        assert!(royalty_recipient("not an address", deployer).is_err());
    }

    #[test]
    fn test_local_chain() {
        assert!(is_local_chain(31337));
        assert!(!is_local_chain(56));
    }
}
