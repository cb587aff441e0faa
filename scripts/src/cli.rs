//! Definitions of CLI arguments and commands for deploy scripts

use std::{path::PathBuf, str::FromStr};

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    commands::{
        configure, deploy_all, deploy_single_catalog, deploy_single_collection,
        deploy_single_utility, print_plan,
    },
    constants::{CATALOG_METADATA_URI, CATALOG_TYPE, DEFAULT_EXPLORER_API_URL, DEFAULT_RPC_URL},
    deploy::DeployContext,
    errors::ScriptError,
    types::{Collection, UtilityContract},
    utils::setup_client,
    verify::ExplorerConfig,
};

/// Scripts for deploying & configuring the Roadmap collections
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, env = "DEPLOYMENTS_PATH", default_value = "deployments.json")]
    pub deployments_path: String,

    /// Root of the Hardhat artifacts directory
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Etherscan-compatible explorer API endpoint
    #[arg(long, env = "EXPLORER_API_URL", default_value = DEFAULT_EXPLORER_API_URL)]
    pub explorer_api_url: String,

    /// Explorer API key, verification is skipped without one
    #[arg(long, env = "EXPLORER_API_KEY", hide_env_values = true)]
    pub explorer_api_key: Option<String>,

    /// Address of the Singular registry to add the collections to
    #[arg(long, env = "SINGULAR_REGISTRY")]
    pub registry: Option<String>,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Runs the selected command
    pub async fn run(self) -> Result<(), ScriptError> {
        if let Command::Plan = self.command {
            return print_plan();
        }

        let priv_key = self.priv_key.as_deref().ok_or_else(|| {
            ScriptError::ClientInitialization("no deployer private key provided".to_string())
        })?;
        let (client, deployer) = setup_client(priv_key, &self.rpc_url)?;

        let explorer = self.explorer_api_key.map(|api_key| ExplorerConfig {
            api_url: self.explorer_api_url,
            api_key,
        });
        let registry = self
            .registry
            .as_deref()
            .map(Address::from_str)
            .transpose()
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

        let ctx = DeployContext::new(
            client,
            deployer,
            self.artifacts_dir,
            self.deployments_path,
            explorer,
            registry,
        )
        .await?;

        self.command.run(&ctx).await
    }
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Roadmap, QuarterBoxes & QuarterTexts collections, in that order
    DeployAll,
    /// Deploy a single collection
    DeployCollection(DeployCollectionArgs),
    /// Deploy one of the RMRK utility contracts
    DeployUtility(DeployUtilityArgs),
    /// Deploy the catalog
    DeployCatalog(DeployCatalogArgs),
    /// Configure the deployed catalog & collections
    Configure(ConfigureArgs),
    /// Print the deployment plan as JSON, without connecting to the network
    Plan,
}

impl Command {
    /// Runs the command against the chain of the given context
    pub async fn run(self, ctx: &DeployContext) -> Result<(), ScriptError> {
        match self {
            Command::DeployAll => deploy_all(ctx).await,
            Command::DeployCollection(args) => deploy_single_collection(args, ctx).await,
            Command::DeployUtility(args) => deploy_single_utility(args, ctx).await,
            Command::DeployCatalog(args) => deploy_single_catalog(args, ctx).await,
            Command::Configure(args) => configure(args, ctx).await,
            Command::Plan => print_plan(),
        }
    }
}

/// Arguments of the `deploy-collection` command
#[derive(Args)]
pub struct DeployCollectionArgs {
    /// The collection to deploy
    #[arg(short, long)]
    pub collection: Collection,
}

/// Arguments of the `deploy-utility` command
#[derive(Args)]
pub struct DeployUtilityArgs {
    /// The utility contract to deploy
    #[arg(short, long)]
    pub contract: UtilityContract,
}

/// Arguments of the `deploy-catalog` command
#[derive(Args)]
pub struct DeployCatalogArgs {
    /// The catalog metadata URI
    #[arg(short, long, default_value = CATALOG_METADATA_URI)]
    pub metadata_uri: String,

    /// The media type of the catalog's parts
    #[arg(short, long, default_value = CATALOG_TYPE)]
    pub catalog_type: String,
}

/// Arguments of the `configure` command.
///
/// The Roadmap, QuarterBoxes, QuarterTexts & catalog addresses are read from the deployments file.
#[derive(Args)]
pub struct ConfigureArgs {
    /// Run a single step, by default all of them are run in order
    #[arg(short, long)]
    pub step: Option<ConfigureStep>,
}

/// The configuration steps
#[derive(ValueEnum, Copy, Clone)]
pub enum ConfigureStep {
    /// Add the Roadmap's slots to the catalog
    Catalog,
    /// Add the Roadmap's main asset and auto-accept the child collections
    Roadmap,
    /// Add the child assets and allow equipping them into the Roadmap
    Children,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::types::{Collection, UtilityContract};

    use super::{Cli, Command, ConfigureStep};

    #[test]
    fn test_parse_deploy_collection() {
        let cli = Cli::try_parse_from([
            "roadmap-scripts",
            "--priv-key",
            "0x01",
            "deploy-collection",
            "--collection",
            "quarter-boxes",
        ])
        .unwrap();

        assert_eq!(cli.deployments_path, "deployments.json");
        match cli.command {
            Command::DeployCollection(args) => {
                assert_eq!(args.collection, Collection::QuarterBoxes)
            }
            _ => panic!("expected deploy-collection"),
        }
    }

    #[test]
    fn test_parse_deploy_utility() {
        let cli = Cli::try_parse_from([
            "roadmap-scripts",
            "deploy-utility",
            "-c",
            "equip-render-utils",
        ])
        .unwrap();

        match cli.command {
            Command::DeployUtility(args) => {
                assert_eq!(args.contract, UtilityContract::EquipRenderUtils)
            }
            _ => panic!("expected deploy-utility"),
        }
    }

    #[test]
    fn test_parse_configure_step() {
        let cli =
            Cli::try_parse_from(["roadmap-scripts", "configure", "--step", "children"]).unwrap();

        match cli.command {
            Command::Configure(args) => {
                assert!(matches!(args.step, Some(ConfigureStep::Children)))
            }
            _ => panic!("expected configure"),
        }
    }

    #[test]
    fn test_catalog_defaults() {
        let cli = Cli::try_parse_from(["roadmap-scripts", "deploy-catalog"]).unwrap();

        match cli.command {
            Command::DeployCatalog(args) => assert_eq!(args.catalog_type, "image/png"),
            _ => panic!("expected deploy-catalog"),
        }
    }

    #[test]
    fn test_unknown_collection_rejected() {
        assert!(Cli::try_parse_from([
            "roadmap-scripts",
            "deploy-collection",
            "--collection",
            "quarter-stickers",
        ])
        .is_err());
    }
}
