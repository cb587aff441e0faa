//! Deployment of the individual contracts

use std::{path::PathBuf, time::Duration};

use alloy::{primitives::Address, providers::Provider};
use alloy_sol_types::SolValue;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    artifacts::load_artifact,
    constants::{COLLECTION_VERIFICATION_DELAY_SECS, UTILITY_VERIFICATION_DELAY_SECS},
    errors::ScriptError,
    solidity::ISingularRegistry,
    types::{Collection, Contract, UtilityContract},
    utils::{
        configured_royalty_recipient, deploy_bytecode, is_local_chain, send_tx,
        write_deployed_address, Wallet,
    },
    verify::{submit_verification, ExplorerConfig, VerificationRequest},
};

/// Everything needed to deploy & configure contracts on a given chain
pub struct DeployContext {
    /// The provider, signing with the deployer's key
    pub client: Wallet,
    /// The address of the deployer
    pub deployer: Address,
    /// The chain being deployed to
    pub chain_id: u64,
    /// The root of the Hardhat artifacts directory
    pub artifacts_dir: PathBuf,
    /// The path of the `deployments.json` file
    pub deployments_path: String,
    /// The block explorer to verify contracts on, if any
    pub explorer: Option<ExplorerConfig>,
    /// The Singular registry to add collections to, if any
    pub registry: Option<Address>,
}

impl DeployContext {
    /// Creates a context for the chain the client is connected to
    pub async fn new(
        client: Wallet,
        deployer: Address,
        artifacts_dir: PathBuf,
        deployments_path: String,
        explorer: Option<ExplorerConfig>,
        registry: Option<Address>,
    ) -> Result<Self, ScriptError> {
        let chain_id = client
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

        Ok(Self {
            client,
            deployer,
            chain_id,
            artifacts_dir,
            deployments_path,
            explorer,
            registry,
        })
    }

    /// Whether the context targets a local development node
    pub fn is_local(&self) -> bool {
        is_local_chain(self.chain_id)
    }
}

/// Deploys the Roadmap parent collection
pub async fn deploy_roadmap(ctx: &DeployContext) -> Result<Address, ScriptError> {
    deploy_collection(ctx, Collection::Roadmap).await
}

/// Deploys the QuarterBoxes child collection
pub async fn deploy_quarter_boxes(ctx: &DeployContext) -> Result<Address, ScriptError> {
    deploy_collection(ctx, Collection::QuarterBoxes).await
}

/// Deploys the QuarterTexts child collection
pub async fn deploy_quarter_texts(ctx: &DeployContext) -> Result<Address, ScriptError> {
    deploy_collection(ctx, Collection::QuarterTexts).await
}

/// Deploys a collection, then, outside of local networks, verifies it
/// and adds it to the Singular registry
pub async fn deploy_collection(
    ctx: &DeployContext,
    collection: Collection,
) -> Result<Address, ScriptError> {
    let contract = collection.contract();
    info!("Deploying {contract} to chain {}...", ctx.chain_id);

    let royalty_recipient = configured_royalty_recipient(ctx.deployer)?;
    let constructor_args = collection.constructor_args(royalty_recipient);
    let address = deploy_contract(ctx, contract, &constructor_args).await?;

    publish_collection(ctx, collection, address, &constructor_args).await?;
    Ok(address)
}

/// Verifies a deployed collection & adds it to the Singular registry.
///
/// Nothing is done on local networks. A failed verification aborts before
/// the registry is touched.
async fn publish_collection(
    ctx: &DeployContext,
    collection: Collection,
    address: Address,
    constructor_args: &[u8],
) -> Result<(), ScriptError> {
    if ctx.is_local() {
        return Ok(());
    }

    let contract = collection.contract();
    verify(
        ctx,
        contract,
        address,
        constructor_args,
        COLLECTION_VERIFICATION_DELAY_SECS,
    )
    .await?;

    match ctx.registry {
        Some(registry_address) => {
            let registry = ISingularRegistry::new(registry_address, ctx.client.clone());
            send_tx(
                registry.addExternalCollection(address, collection.metadata_uri().to_string()),
            )
            .await?;
            info!("{contract} added to Singular Registry");
        }
        None => {
            warn!("No registry configured, {contract} was not added to the Singular Registry")
        }
    }

    Ok(())
}

/// Deploys one of the RMRK utility contracts
pub async fn deploy_utility(
    ctx: &DeployContext,
    utility: UtilityContract,
) -> Result<Address, ScriptError> {
    let contract = utility.contract();
    let address = deploy_contract(ctx, contract, &[]).await?;
    verify_if_not_local(ctx, contract, address, &[], UTILITY_VERIFICATION_DELAY_SECS).await;

    Ok(address)
}

/// Deploys a catalog with the given metadata & part media type
pub async fn deploy_catalog(
    ctx: &DeployContext,
    metadata_uri: &str,
    catalog_type: &str,
) -> Result<Address, ScriptError> {
    let constructor_args = catalog_constructor_args(metadata_uri, catalog_type);
    let address = deploy_contract(ctx, Contract::Catalog, &constructor_args).await?;
    verify_if_not_local(
        ctx,
        Contract::Catalog,
        address,
        &constructor_args,
        UTILITY_VERIFICATION_DELAY_SECS,
    )
    .await;

    Ok(address)
}

/// ABI-encodes the catalog's `(string metadataURI, string type_)` constructor arguments
pub fn catalog_constructor_args(metadata_uri: &str, catalog_type: &str) -> Vec<u8> {
    (metadata_uri.to_string(), catalog_type.to_string()).abi_encode_params()
}

/// Deploys a contract from its artifact and records its address in the deployments file
async fn deploy_contract(
    ctx: &DeployContext,
    contract: Contract,
    constructor_args: &[u8],
) -> Result<Address, ScriptError> {
    let artifact = load_artifact(&ctx.artifacts_dir, contract)?;
    let creation_code = artifact.creation_code()?;
    let address = deploy_bytecode(&ctx.client, &creation_code, constructor_args).await?;
    info!("{contract} deployed to {address:#x}");

    write_deployed_address(&ctx.deployments_path, contract.deployments_key(), address)?;
    Ok(address)
}

/// Verifies the contract unless deploying to a local network.
///
/// Failures are only logged, the contract may already be verified.
async fn verify_if_not_local(
    ctx: &DeployContext,
    contract: Contract,
    address: Address,
    constructor_args: &[u8],
    delay_secs: u64,
) {
    if ctx.is_local() {
        return;
    }

    if let Err(e) = verify(ctx, contract, address, constructor_args, delay_secs).await {
        warn!("Could not verify {contract} at {address:#x}, it may already be verified: {e}");
    }
}

/// Submits the contract's sources to the block explorer
async fn verify(
    ctx: &DeployContext,
    contract: Contract,
    address: Address,
    constructor_args: &[u8],
    delay_secs: u64,
) -> Result<(), ScriptError> {
    let explorer = ctx.explorer.as_ref().ok_or_else(|| {
        ScriptError::Verification(format!("no explorer API key configured to verify {contract}"))
    })?;

    // The explorer must index the deployment before it can verify it
    info!("Waiting {delay_secs} seconds before verifying {contract}...");
    sleep(Duration::from_secs(delay_secs)).await;

    info!("Explorer contract verification starting now.");
    let request = VerificationRequest::new(
        &ctx.artifacts_dir,
        contract,
        ctx.chain_id,
        address,
        constructor_args,
    )?;
    submit_verification(explorer, &request).await?;
    info!("{contract} verified at {address:#x}");

    Ok(())
}
