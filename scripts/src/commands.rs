//! Implementations of the various deploy scripts

use tracing::info;

use crate::{
    cli::{
        ConfigureArgs, ConfigureStep, DeployCatalogArgs, DeployCollectionArgs, DeployUtilityArgs,
    },
    configure::{configure_catalog, configure_children, configure_roadmap, DeployedContracts},
    deploy::{
        deploy_catalog, deploy_collection, deploy_quarter_boxes, deploy_quarter_texts,
        deploy_roadmap, deploy_utility, DeployContext,
    },
    errors::ScriptError,
    plan::DeploymentPlan,
    types::Collection,
};

/// Deploys the Roadmap, then the QuarterBoxes & QuarterTexts child collections,
/// stopping at the first failure
pub async fn deploy_all(ctx: &DeployContext) -> Result<(), ScriptError> {
    for collection in Collection::DEPLOY_ORDER {
        match collection {
            Collection::Roadmap => deploy_roadmap(ctx).await?,
            Collection::QuarterBoxes => deploy_quarter_boxes(ctx).await?,
            Collection::QuarterTexts => deploy_quarter_texts(ctx).await?,
        };
    }

    info!(
        "All collections deployed, addresses written to {}",
        ctx.deployments_path
    );
    Ok(())
}

/// Deploys the collection selected on the command line
pub async fn deploy_single_collection(
    args: DeployCollectionArgs,
    ctx: &DeployContext,
) -> Result<(), ScriptError> {
    deploy_collection(ctx, args.collection).await.map(|_| ())
}

/// Deploys the utility contract selected on the command line
pub async fn deploy_single_utility(
    args: DeployUtilityArgs,
    ctx: &DeployContext,
) -> Result<(), ScriptError> {
    deploy_utility(ctx, args.contract).await.map(|_| ())
}

/// Deploys a catalog with the metadata & part type given on the command line
pub async fn deploy_single_catalog(
    args: DeployCatalogArgs,
    ctx: &DeployContext,
) -> Result<(), ScriptError> {
    deploy_catalog(ctx, &args.metadata_uri, &args.catalog_type)
        .await
        .map(|_| ())
}

/// Runs the requested configuration step, or all of them in order
pub async fn configure(args: ConfigureArgs, ctx: &DeployContext) -> Result<(), ScriptError> {
    let contracts = DeployedContracts::from_deployments_file(&ctx.deployments_path)?;

    match args.step {
        Some(ConfigureStep::Catalog) => configure_catalog(ctx, &contracts).await,
        Some(ConfigureStep::Roadmap) => configure_roadmap(ctx, &contracts).await,
        Some(ConfigureStep::Children) => configure_children(ctx, &contracts).await,
        None => {
            configure_catalog(ctx, &contracts).await?;
            configure_roadmap(ctx, &contracts).await?;
            configure_children(ctx, &contracts).await
        }
    }
}

/// Prints the deployment plan, without touching the chain
pub fn print_plan() -> Result<(), ScriptError> {
    println!("{}", DeploymentPlan::new().to_json()?);
    Ok(())
}
