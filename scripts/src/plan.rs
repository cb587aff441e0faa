//! A dry-run summary of everything the scripts deploy & configure

use serde::Serialize;

use crate::{
    constants::{
        CATALOG_METADATA_URI, CATALOG_TYPE, CHILD_SLOTS, MAIN_ROADMAP_ASSET_METADATA_URI,
        MINT_PRICE, PARENT_EQUIPPABLE_GROUP_ID, ROYALTIES_BPS,
    },
    configure::roadmap_part_ids,
    errors::ScriptError,
    types::{ChildCollection, Collection},
};

/// The full deployment plan
#[derive(Debug, Serialize)]
pub struct DeploymentPlan {
    /// The collections, in deployment order
    pub collections: Vec<CollectionPlan>,
    /// The mint price in wei, as a decimal string
    pub mint_price_wei: String,
    /// Royalties in basis points, shared by every collection
    pub royalties_bps: u64,
    /// The catalog
    pub catalog: CatalogPlan,
    /// The main asset of the Roadmap
    pub roadmap_asset: RoadmapAssetPlan,
    /// The slots of the Roadmap & the child assets equippable into them
    pub slots: Vec<SlotPlan>,
}

/// A collection to deploy
#[derive(Debug, Serialize)]
pub struct CollectionPlan {
    /// The contract name
    pub name: &'static str,
    /// The collection metadata URI
    pub metadata_uri: &'static str,
    /// The maximum supply
    pub max_supply: u64,
}

/// The catalog to deploy
#[derive(Debug, Serialize)]
pub struct CatalogPlan {
    /// The catalog metadata URI
    pub metadata_uri: &'static str,
    /// The media type of the catalog's parts
    pub part_type: &'static str,
}

/// The asset entry added to the Roadmap
#[derive(Debug, Serialize)]
pub struct RoadmapAssetPlan {
    /// The equippable group of the asset
    pub equippable_group_id: u64,
    /// The asset metadata URI
    pub metadata_uri: &'static str,
    /// The catalog parts the asset is composed of
    pub part_ids: Vec<u64>,
}

/// A slot of the Roadmap
#[derive(Debug, Serialize)]
pub struct SlotPlan {
    /// The catalog part ID, also the equippable group of the child assets
    pub slot_id: u64,
    /// The child collection equipped into the slot
    pub collection: ChildCollection,
    /// The quarter the slot represents
    pub quarter: u8,
    /// The z-index of the slot
    pub z: u8,
    /// The catalog part metadata URI
    pub metadata_uri: &'static str,
    /// The metadata of the quarter's assets as a collection
    pub collection_metadata: &'static str,
    /// The metadata URIs of the child assets
    pub assets: Vec<String>,
}

impl DeploymentPlan {
    /// Builds the plan from the configured constants
    pub fn new() -> Self {
        let collections = Collection::DEPLOY_ORDER
            .into_iter()
            .map(|collection| CollectionPlan {
                name: collection.contract().name(),
                metadata_uri: collection.metadata_uri(),
                max_supply: collection.max_supply(),
            })
            .collect();

        let slots = CHILD_SLOTS
            .iter()
            .map(|slot| SlotPlan {
                slot_id: slot.slot_id,
                collection: slot.collection,
                quarter: slot.quarter,
                z: slot.collection.z_index(),
                metadata_uri: slot.slot_metadata,
                collection_metadata: slot.collection_metadata,
                assets: slot.asset_metadata_uris(),
            })
            .collect();

        Self {
            collections,
            mint_price_wei: MINT_PRICE.to_string(),
            royalties_bps: ROYALTIES_BPS,
            catalog: CatalogPlan {
                metadata_uri: CATALOG_METADATA_URI,
                part_type: CATALOG_TYPE,
            },
            roadmap_asset: RoadmapAssetPlan {
                equippable_group_id: PARENT_EQUIPPABLE_GROUP_ID,
                metadata_uri: MAIN_ROADMAP_ASSET_METADATA_URI,
                part_ids: roadmap_part_ids(),
            },
            slots,
        }
    }

    /// Pretty-printed JSON rendering of the plan
    pub fn to_json(&self) -> Result<String, ScriptError> {
        serde_json::to_string_pretty(self).map_err(|e| ScriptError::Serde(e.to_string()))
    }
}

impl Default for DeploymentPlan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        constants::{COLLECTION_METADATA_PLACEHOLDER, MAX_SUPPLY_PARENT, Q1_BOX_COLLECTION_METADATA},
        types::ChildCollection,
    };

    use super::DeploymentPlan;

    /// The maximum supply the plan gives a child collection
    fn max_supply_of(plan: &DeploymentPlan, collection: ChildCollection) -> Option<u64> {
        let name = collection.collection().contract().name();
        plan.collections
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.max_supply)
    }

    #[test]
    fn test_plan_json() {
        let plan = DeploymentPlan::new();
        let json: Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();

        let names: Vec<&str> = json["collections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Roadmap", "QuarterBoxes", "QuarterTexts"]);

        assert_eq!(json["mint_price_wei"], "5000000000000000");
        assert_eq!(json["royalties_bps"], 500);
        assert_eq!(json["slots"].as_array().unwrap().len(), 8);
        assert_eq!(json["slots"][0]["collection"], "QuarterBoxes");
        assert_eq!(json["slots"][0]["assets"].as_array().unwrap().len(), 5);
        assert_eq!(json["slots"][0]["collection_metadata"], Q1_BOX_COLLECTION_METADATA);
        assert_eq!(json["collections"][1]["metadata_uri"], COLLECTION_METADATA_PLACEHOLDER);
        assert_eq!(json["roadmap_asset"]["part_ids"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_children_cover_every_parent_quarter() {
        let plan = DeploymentPlan::new();
        for child in [ChildCollection::QuarterBoxes, ChildCollection::QuarterTexts] {
            assert_eq!(max_supply_of(&plan, child), Some(4 * MAX_SUPPLY_PARENT));
        }
    }
}
