//! Configuration of deployed contracts: catalog slots, asset entries & the
//! parent / child wiring between the Roadmap and its child collections

use alloy::primitives::Address;
use tracing::info;

use crate::{
    constants::{
        CHILD_SLOTS, MAIN_ROADMAP_ASSET_METADATA_URI, PARENT_EQUIPPABLE_GROUP_ID, PART_TYPE_SLOT,
    },
    deploy::DeployContext,
    errors::ScriptError,
    solidity::{
        IRMRKCatalog::{self, IntakeStruct, Part},
        IRMRKEquippable,
    },
    types::{ChildCollection, ChildSlot, Contract},
    utils::{parse_addr_from_deployments_file, send_tx},
};

/// The addresses of the contracts taking part in the configuration
#[derive(Debug, Clone, Copy)]
pub struct DeployedContracts {
    /// The Roadmap parent collection
    pub roadmap: Address,
    /// The QuarterBoxes child collection
    pub quarter_boxes: Address,
    /// The QuarterTexts child collection
    pub quarter_texts: Address,
    /// The catalog
    pub catalog: Address,
}

impl DeployedContracts {
    /// Reads the addresses from the deployments file
    pub fn from_deployments_file(deployments_path: &str) -> Result<Self, ScriptError> {
        let read = |contract: Contract| {
            parse_addr_from_deployments_file(deployments_path, contract.deployments_key())
        };

        Ok(Self {
            roadmap: read(Contract::Roadmap)?,
            quarter_boxes: read(Contract::QuarterBoxes)?,
            quarter_texts: read(Contract::QuarterTexts)?,
            catalog: read(Contract::Catalog)?,
        })
    }

    /// The address of the given child collection
    pub fn child(&self, collection: ChildCollection) -> Address {
        match collection {
            ChildCollection::QuarterBoxes => self.quarter_boxes,
            ChildCollection::QuarterTexts => self.quarter_texts,
        }
    }
}

/// The catalog parts of the Roadmap, one slot per quarter per child collection,
/// each equippable only by its child collection
pub fn catalog_part_list(contracts: &DeployedContracts) -> Vec<IntakeStruct> {
    CHILD_SLOTS
        .iter()
        .map(|slot| IntakeStruct {
            partId: slot.slot_id,
            part: Part {
                itemType: PART_TYPE_SLOT,
                z: slot.collection.z_index(),
                equippable: vec![contracts.child(slot.collection)],
                metadataURI: slot.slot_metadata.to_string(),
            },
        })
        .collect()
}

/// The part IDs the Roadmap's main asset is composed of
pub fn roadmap_part_ids() -> Vec<u64> {
    CHILD_SLOTS.iter().map(|slot| slot.slot_id).collect()
}

/// Adds the Roadmap's slots to the catalog
pub async fn configure_catalog(
    ctx: &DeployContext,
    contracts: &DeployedContracts,
) -> Result<(), ScriptError> {
    let catalog = IRMRKCatalog::new(contracts.catalog, ctx.client.clone());

    send_tx(catalog.addPartList(catalog_part_list(contracts))).await?;
    info!("Added {} slot parts to the catalog", CHILD_SLOTS.len());

    Ok(())
}

/// Adds the main asset to the Roadmap and has it auto-accept its child collections
pub async fn configure_roadmap(
    ctx: &DeployContext,
    contracts: &DeployedContracts,
) -> Result<(), ScriptError> {
    let roadmap = IRMRKEquippable::new(contracts.roadmap, ctx.client.clone());

    send_tx(roadmap.addEquippableAssetEntry(
        PARENT_EQUIPPABLE_GROUP_ID,
        contracts.catalog,
        MAIN_ROADMAP_ASSET_METADATA_URI.to_string(),
        roadmap_part_ids(),
    ))
    .await?;
    info!("Added main asset to the Roadmap");

    for child in [contracts.quarter_boxes, contracts.quarter_texts] {
        send_tx(roadmap.setAutoAcceptCollection(child, true)).await?;
        info!("Roadmap auto-accepts children from {child:#x}");
    }

    Ok(())
}

/// A transaction sent to a child collection while configuring one of its quarters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildCall {
    /// `addEquippableAssetEntry`
    AddAssetEntry {
        /// The group the asset can be equipped as
        equippable_group_id: u64,
        /// The catalog of the asset's own parts, zero as assets have none
        catalog: Address,
        /// The asset metadata
        metadata_uri: String,
        /// The asset's own parts
        part_ids: Vec<u64>,
    },
    /// `setValidParentForEquippableGroup`
    SetValidParent {
        /// The group being allowed into the parent
        equippable_group_id: u64,
        /// The parent collection
        parent: Address,
        /// The parent's slot the group is equipped into
        part_id: u64,
    },
}

/// The calls configuring one quarter of a child collection, in the order they are sent:
/// every asset entry first, then the parent the assets can be equipped into
pub fn child_calls(slot: &ChildSlot, roadmap: Address) -> Vec<ChildCall> {
    let mut calls: Vec<ChildCall> = slot
        .asset_metadata_uris()
        .into_iter()
        .map(|metadata_uri| ChildCall::AddAssetEntry {
            equippable_group_id: slot.slot_id,
            catalog: Address::ZERO,
            metadata_uri,
            part_ids: Vec::new(),
        })
        .collect();

    calls.push(ChildCall::SetValidParent {
        equippable_group_id: slot.slot_id,
        parent: roadmap,
        part_id: slot.slot_id,
    });
    calls
}

/// Adds the assets of every quarter to the child collections and allows them
/// to be equipped into the Roadmap's matching slot
pub async fn configure_children(
    ctx: &DeployContext,
    contracts: &DeployedContracts,
) -> Result<(), ScriptError> {
    for slot in CHILD_SLOTS.iter() {
        let child = IRMRKEquippable::new(contracts.child(slot.collection), ctx.client.clone());

        for call in child_calls(slot, contracts.roadmap) {
            match call {
                ChildCall::AddAssetEntry {
                    equippable_group_id,
                    catalog,
                    metadata_uri,
                    part_ids,
                } => send_tx(child.addEquippableAssetEntry(
                    equippable_group_id,
                    catalog,
                    metadata_uri,
                    part_ids,
                ))
                .await?,
                ChildCall::SetValidParent {
                    equippable_group_id,
                    parent,
                    part_id,
                } => send_tx(child.setValidParentForEquippableGroup(
                    equippable_group_id,
                    parent,
                    part_id,
                ))
                .await?,
            };
        }

        info!(
            "Configured Q{} of {:?}, equippable into slot {}",
            slot.quarter, slot.collection, slot.slot_id
        );
    }

    Ok(())
}
