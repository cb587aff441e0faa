//! Type definitions used throughout the scripts

use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, U256};
use alloy_sol_types::SolValue;
use clap::ValueEnum;
use serde::Serialize;

use crate::constants::{
    BOX_Z_INDEX, COLLECTION_METADATA_PLACEHOLDER, MAX_SUPPLY_BOXES, MAX_SUPPLY_PARENT,
    MAX_SUPPLY_TEXTS, PROJECT_CONTRACTS_DIR, RMRK_IMPLEMENTATIONS_DIR, RMRK_UTILS_DIR,
    ROYALTIES_BPS, TEXT_Z_INDEX, TOTAL_ASSETS_PER_CHILDREN_COLLECTION,
};

/// Every contract the scripts know how to deploy
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Contract {
    /// The Roadmap parent collection
    Roadmap,
    /// The QuarterBoxes child collection
    QuarterBoxes,
    /// The QuarterTexts child collection
    QuarterTexts,
    /// The catalog holding the Roadmap's slots
    Catalog,
    /// The RMRK bulk writer
    BulkWriter,
    /// The RMRK catalog utilities
    CatalogUtils,
    /// The RMRK collection utilities
    CollectionUtils,
    /// The RMRK equip render utilities
    EquipRenderUtils,
}

impl Contract {
    /// The name of the contract, as it appears in its Solidity source
    pub fn name(&self) -> &'static str {
        match self {
            Contract::Roadmap => "Roadmap",
            Contract::QuarterBoxes => "QuarterBoxes",
            Contract::QuarterTexts => "QuarterTexts",
            Contract::Catalog => "RMRKCatalogImpl",
            Contract::BulkWriter => "RMRKBulkWriter",
            Contract::CatalogUtils => "RMRKCatalogUtils",
            Contract::CollectionUtils => "RMRKCollectionUtils",
            Contract::EquipRenderUtils => "RMRKEquipRenderUtils",
        }
    }

    /// The path of the Solidity file defining the contract, relative to the project root
    pub fn source_name(&self) -> String {
        let dir = match self {
            Contract::Roadmap | Contract::QuarterBoxes | Contract::QuarterTexts => {
                PROJECT_CONTRACTS_DIR
            }
            Contract::Catalog => RMRK_IMPLEMENTATIONS_DIR,
            Contract::BulkWriter
            | Contract::CatalogUtils
            | Contract::CollectionUtils
            | Contract::EquipRenderUtils => RMRK_UTILS_DIR,
        };

        format!("{dir}/{}.sol", self.name())
    }

    /// The fully qualified name of the contract, e.g. `contracts/Roadmap.sol:Roadmap`
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name(), self.name())
    }

    /// The path of the contract's Hardhat artifact under the given artifacts root
    pub fn artifact_path(&self, artifacts_dir: &Path) -> PathBuf {
        artifacts_dir
            .join(self.source_name())
            .join(format!("{}.json", self.name()))
    }

    /// The contract's key in the `deployments.json` file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            Contract::Roadmap => "roadmap_contract",
            Contract::QuarterBoxes => "quarter_boxes_contract",
            Contract::QuarterTexts => "quarter_texts_contract",
            Contract::Catalog => "catalog_contract",
            Contract::BulkWriter => "bulk_writer_contract",
            Contract::CatalogUtils => "catalog_utils_contract",
            Contract::CollectionUtils => "collection_utils_contract",
            Contract::EquipRenderUtils => "equip_render_utils_contract",
        }
    }
}

impl Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The NFT collections of the project
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collection {
    /// The Roadmap parent collection
    Roadmap,
    /// The QuarterBoxes child collection
    QuarterBoxes,
    /// The QuarterTexts child collection
    QuarterTexts,
}

impl Collection {
    /// The order in which the collections are deployed, the parent first
    pub const DEPLOY_ORDER: [Collection; 3] = [
        Collection::Roadmap,
        Collection::QuarterBoxes,
        Collection::QuarterTexts,
    ];

    /// The contract implementing the collection
    pub fn contract(&self) -> Contract {
        match self {
            Collection::Roadmap => Contract::Roadmap,
            Collection::QuarterBoxes => Contract::QuarterBoxes,
            Collection::QuarterTexts => Contract::QuarterTexts,
        }
    }

    /// The collection metadata URI given to the constructor & the registry.
    ///
    /// Shared by the three collections until their metadata is published.
    pub fn metadata_uri(&self) -> &'static str {
        COLLECTION_METADATA_PLACEHOLDER
    }

    /// The maximum number of tokens that can be minted in the collection
    pub fn max_supply(&self) -> u64 {
        match self {
            Collection::Roadmap => MAX_SUPPLY_PARENT,
            Collection::QuarterBoxes => MAX_SUPPLY_BOXES,
            Collection::QuarterTexts => MAX_SUPPLY_TEXTS,
        }
    }

    /// ABI-encodes the collection's constructor arguments, i.e. the collection metadata,
    /// the max supply, the royalty recipient & the royalty percentage in basis points
    pub fn constructor_args(&self, royalty_recipient: Address) -> Vec<u8> {
        (
            self.metadata_uri().to_string(),
            U256::from(self.max_supply()),
            royalty_recipient,
            U256::from(ROYALTIES_BPS),
        )
            .abi_encode_params()
    }
}

/// The utility contracts deployed alongside the collections
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum UtilityContract {
    /// The RMRK bulk writer
    BulkWriter,
    /// The RMRK catalog utilities
    CatalogUtils,
    /// The RMRK collection utilities
    CollectionUtils,
    /// The RMRK equip render utilities
    EquipRenderUtils,
}

impl UtilityContract {
    /// The contract implementing the utility
    pub fn contract(&self) -> Contract {
        match self {
            UtilityContract::BulkWriter => Contract::BulkWriter,
            UtilityContract::CatalogUtils => Contract::CatalogUtils,
            UtilityContract::CollectionUtils => Contract::CollectionUtils,
            UtilityContract::EquipRenderUtils => Contract::EquipRenderUtils,
        }
    }
}

/// The child collections equipped into the Roadmap's slots
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum ChildCollection {
    /// One box per quarter
    QuarterBoxes,
    /// One text per quarter, rendered over the box
    QuarterTexts,
}

impl ChildCollection {
    /// The collection this child collection corresponds to
    pub const fn collection(&self) -> Collection {
        match self {
            ChildCollection::QuarterBoxes => Collection::QuarterBoxes,
            ChildCollection::QuarterTexts => Collection::QuarterTexts,
        }
    }

    /// The z-index at which the collection's assets are rendered in the parent
    pub const fn z_index(&self) -> u8 {
        match self {
            ChildCollection::QuarterBoxes => BOX_Z_INDEX,
            ChildCollection::QuarterTexts => TEXT_Z_INDEX,
        }
    }
}

/// A catalog slot of the Roadmap, along with the child assets that can be equipped into it
#[derive(Debug, Copy, Clone)]
pub struct ChildSlot {
    /// The collection whose assets are equipped into the slot
    pub collection: ChildCollection,
    /// The quarter of the year the slot represents, 1 through 4
    pub quarter: u8,
    /// The catalog part ID of the slot, doubling as the equippable group of its assets
    pub slot_id: u64,
    /// The catalog part metadata of the slot
    pub slot_metadata: &'static str,
    /// The metadata describing the quarter's assets as a collection
    pub collection_metadata: &'static str,
    /// The base URI of the assets equippable into the slot
    pub asset_base_uri: &'static str,
}

impl ChildSlot {
    /// Constructor
    pub const fn new(
        collection: ChildCollection,
        quarter: u8,
        slot_id: u64,
        slot_metadata: &'static str,
        collection_metadata: &'static str,
        asset_base_uri: &'static str,
    ) -> Self {
        Self {
            collection,
            quarter,
            slot_id,
            slot_metadata,
            collection_metadata,
            asset_base_uri,
        }
    }

    /// The metadata URIs of every asset equippable into the slot
    pub fn asset_metadata_uris(&self) -> Vec<String> {
        (1..=TOTAL_ASSETS_PER_CHILDREN_COLLECTION)
            .map(|i| format!("{}{i}.json", self.asset_base_uri))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use alloy::primitives::{Address, U256};
    use alloy_sol_types::SolValue;

    use crate::constants::{
        CHILD_SLOTS, COLLECTION_METADATA_PLACEHOLDER, MAX_SUPPLY_BOXES, Q2_TEXT_BASE_URI,
        ROYALTIES_BPS,
    };

    use super::{ChildCollection, Collection, Contract};

    #[test]
    fn test_fully_qualified_names() {
        assert_eq!(
            Contract::Roadmap.fully_qualified_name(),
            "contracts/Roadmap.sol:Roadmap"
        );
        assert_eq!(
            Contract::Catalog.fully_qualified_name(),
            "@rmrk-team/evm-contracts/contracts/implementations/RMRKCatalogImpl.sol:RMRKCatalogImpl"
        );
    }

    #[test]
    fn test_artifact_path() {
        let path = Contract::QuarterTexts.artifact_path(Path::new("artifacts"));
        assert_eq!(
            path,
            Path::new("artifacts/contracts/QuarterTexts.sol/QuarterTexts.json")
        );
    }

    #[test]
    fn test_constructor_args_decode() {
        let recipient = Address::repeat_byte(0xab);
        let encoded = Collection::QuarterBoxes.constructor_args(recipient);

        let (metadata, max_supply, decoded_recipient, royalties) =
            <(String, U256, Address, U256)>::abi_decode_params(&encoded, true).unwrap();

        assert_eq!(metadata, COLLECTION_METADATA_PLACEHOLDER);
        assert_eq!(max_supply, U256::from(MAX_SUPPLY_BOXES));
        assert_eq!(decoded_recipient, recipient);
        assert_eq!(royalties, U256::from(ROYALTIES_BPS));
    }

    #[test]
    fn test_parent_deployed_before_children() {
        assert_eq!(
            Collection::DEPLOY_ORDER,
            [
                Collection::Roadmap,
                Collection::QuarterBoxes,
                Collection::QuarterTexts
            ]
        );
    }

    #[test]
    fn test_asset_metadata_uris() {
        let slot = CHILD_SLOTS
            .iter()
            .find(|slot| slot.collection == ChildCollection::QuarterTexts && slot.quarter == 2)
            .unwrap();

        let uris = slot.asset_metadata_uris();
        assert_eq!(uris.len(), 5);
        assert_eq!(uris[0], format!("{Q2_TEXT_BASE_URI}1.json"));
        assert_eq!(uris[4], format!("{Q2_TEXT_BASE_URI}5.json"));
    }

    #[test]
    fn test_deployment_keys_unique() {
        let contracts = [
            Contract::Roadmap,
            Contract::QuarterBoxes,
            Contract::QuarterTexts,
            Contract::Catalog,
            Contract::BulkWriter,
            Contract::CatalogUtils,
            Contract::CollectionUtils,
            Contract::EquipRenderUtils,
        ];
        let mut keys: Vec<_> = contracts.iter().map(|c| c.deployments_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), contracts.len());
    }
}
