//! Constants used in the deploy scripts

use crate::types::{ChildCollection, ChildSlot};

/// Prefixes a path with the IPFS directory holding all of the project's metadata
macro_rules! metadata_uri {
    () => {
        "ipfs://QmRJ3TadbE9hbQvF677F6V4GdqrqiEtugrjeu491iRUgZW"
    };
    ($path:literal) => {
        concat!(metadata_uri!(), "/", $path)
    };
}

// ------------
// | Metadata |
// ------------

/// The IPFS directory under which all collection, asset & catalog metadata lives
pub const BASE_METADATA_URI: &str = metadata_uri!();

/// The collection metadata passed to every collection's constructor & to the
/// Singular registry, until the collection metadata is published
pub const COLLECTION_METADATA_PLACEHOLDER: &str = "ipfs://TODO/collection";

/// The collection metadata of the Q1 boxes
pub const Q1_BOX_COLLECTION_METADATA: &str = metadata_uri!("q1_box/metadata.json");
/// The collection metadata of the Q2 boxes
pub const Q2_BOX_COLLECTION_METADATA: &str = metadata_uri!("q2_box/metadata.json");
/// The collection metadata of the Q3 boxes
pub const Q3_BOX_COLLECTION_METADATA: &str = metadata_uri!("q3_box/metadata.json");
/// The collection metadata of the Q4 boxes
pub const Q4_BOX_COLLECTION_METADATA: &str = metadata_uri!("q4_box/metadata.json");

/// The collection metadata of the Q1 texts
pub const Q1_TEXT_COLLECTION_METADATA: &str = metadata_uri!("q1_text/metadata.json");
/// The collection metadata of the Q2 texts
pub const Q2_TEXT_COLLECTION_METADATA: &str = metadata_uri!("q2_text/metadata.json");
/// The collection metadata of the Q3 texts
pub const Q3_TEXT_COLLECTION_METADATA: &str = metadata_uri!("q3_text/metadata.json");
/// The collection metadata of the Q4 texts
pub const Q4_TEXT_COLLECTION_METADATA: &str = metadata_uri!("q4_text/metadata.json");

/// The base URI of the Q1 box assets
pub const Q1_BOX_BASE_URI: &str = metadata_uri!("q1_box/assets/");
/// The base URI of the Q2 box assets
pub const Q2_BOX_BASE_URI: &str = metadata_uri!("q2_box/assets/");
/// The base URI of the Q3 box assets
pub const Q3_BOX_BASE_URI: &str = metadata_uri!("q3_box/assets/");
/// The base URI of the Q4 box assets
pub const Q4_BOX_BASE_URI: &str = metadata_uri!("q4_box/assets/");

/// The base URI of the Q1 text assets
pub const Q1_TEXT_BASE_URI: &str = metadata_uri!("q1_text/assets/");
/// The base URI of the Q2 text assets
pub const Q2_TEXT_BASE_URI: &str = metadata_uri!("q2_text/assets/");
/// The base URI of the Q3 text assets
pub const Q3_TEXT_BASE_URI: &str = metadata_uri!("q3_text/assets/");
/// The base URI of the Q4 text assets
pub const Q4_TEXT_BASE_URI: &str = metadata_uri!("q4_text/assets/");

/// The metadata of the single asset every Roadmap token carries
pub const MAIN_ROADMAP_ASSET_METADATA_URI: &str = metadata_uri!("roadmap/assets/main.json");

/// The catalog metadata
pub const CATALOG_METADATA_URI: &str = metadata_uri!("catalog/metadata.json");

/// The media type of the catalog's parts
pub const CATALOG_TYPE: &str = "image/png";

// -------------------------
// | Slots & asset entries |
// -------------------------

/// The number of assets added to each quarter of a child collection
pub const TOTAL_ASSETS_PER_CHILDREN_COLLECTION: u64 = 5;

/// The equippable group of the Roadmap's main asset.
///
/// Only relevant if parents themselves are ever made equippable into something.
pub const PARENT_EQUIPPABLE_GROUP_ID: u64 = 1;

/// The catalog slot holding the Q1 box
pub const Q1_BOX_SLOT_ID: u64 = 1001;
/// The catalog slot holding the Q2 box
pub const Q2_BOX_SLOT_ID: u64 = 1002;
/// The catalog slot holding the Q3 box
pub const Q3_BOX_SLOT_ID: u64 = 1003;
/// The catalog slot holding the Q4 box
pub const Q4_BOX_SLOT_ID: u64 = 1004;

/// The catalog slot holding the Q1 text
pub const Q1_TEXT_SLOT_ID: u64 = 1005;
/// The catalog slot holding the Q2 text
pub const Q2_TEXT_SLOT_ID: u64 = 1006;
/// The catalog slot holding the Q3 text
pub const Q3_TEXT_SLOT_ID: u64 = 1007;
/// The catalog slot holding the Q4 text
pub const Q4_TEXT_SLOT_ID: u64 = 1008;

/// Catalog part metadata for the Q1 box slot
pub const Q1_BOX_SLOT_METADATA: &str = metadata_uri!("catalog/q1_box.json");
/// Catalog part metadata for the Q2 box slot
pub const Q2_BOX_SLOT_METADATA: &str = metadata_uri!("catalog/q2_box.json");
/// Catalog part metadata for the Q3 box slot
pub const Q3_BOX_SLOT_METADATA: &str = metadata_uri!("catalog/q3_box.json");
/// Catalog part metadata for the Q4 box slot
pub const Q4_BOX_SLOT_METADATA: &str = metadata_uri!("catalog/q4_box.json");
/// Catalog part metadata for the Q1 text slot
pub const Q1_TEXT_SLOT_METADATA: &str = metadata_uri!("catalog/q1_text.json");
/// Catalog part metadata for the Q2 text slot
pub const Q2_TEXT_SLOT_METADATA: &str = metadata_uri!("catalog/q2_text.json");
/// Catalog part metadata for the Q3 text slot
pub const Q3_TEXT_SLOT_METADATA: &str = metadata_uri!("catalog/q3_text.json");
/// Catalog part metadata for the Q4 text slot
pub const Q4_TEXT_SLOT_METADATA: &str = metadata_uri!("catalog/q4_text.json");

/// The z-index at which boxes are rendered
pub const BOX_Z_INDEX: u8 = 2;

/// The z-index at which texts are rendered, on top of the boxes
pub const TEXT_Z_INDEX: u8 = 4;

/// Every slot of the Roadmap, in the order in which they are added to the catalog
pub const CHILD_SLOTS: [ChildSlot; 8] = [
    ChildSlot::new(
        ChildCollection::QuarterBoxes,
        1,
        Q1_BOX_SLOT_ID,
        Q1_BOX_SLOT_METADATA,
        Q1_BOX_COLLECTION_METADATA,
        Q1_BOX_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterBoxes,
        2,
        Q2_BOX_SLOT_ID,
        Q2_BOX_SLOT_METADATA,
        Q2_BOX_COLLECTION_METADATA,
        Q2_BOX_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterBoxes,
        3,
        Q3_BOX_SLOT_ID,
        Q3_BOX_SLOT_METADATA,
        Q3_BOX_COLLECTION_METADATA,
        Q3_BOX_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterBoxes,
        4,
        Q4_BOX_SLOT_ID,
        Q4_BOX_SLOT_METADATA,
        Q4_BOX_COLLECTION_METADATA,
        Q4_BOX_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterTexts,
        1,
        Q1_TEXT_SLOT_ID,
        Q1_TEXT_SLOT_METADATA,
        Q1_TEXT_COLLECTION_METADATA,
        Q1_TEXT_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterTexts,
        2,
        Q2_TEXT_SLOT_ID,
        Q2_TEXT_SLOT_METADATA,
        Q2_TEXT_COLLECTION_METADATA,
        Q2_TEXT_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterTexts,
        3,
        Q3_TEXT_SLOT_ID,
        Q3_TEXT_SLOT_METADATA,
        Q3_TEXT_COLLECTION_METADATA,
        Q3_TEXT_BASE_URI,
    ),
    ChildSlot::new(
        ChildCollection::QuarterTexts,
        4,
        Q4_TEXT_SLOT_ID,
        Q4_TEXT_SLOT_METADATA,
        Q4_TEXT_COLLECTION_METADATA,
        Q4_TEXT_BASE_URI,
    ),
];

// ----------------------
// | Supply & royalties |
// ----------------------

/// The maximum supply of the Roadmap collection
pub const MAX_SUPPLY_PARENT: u64 = 1111;

/// The maximum supply of the QuarterBoxes collection, one box per quarter per parent
pub const MAX_SUPPLY_BOXES: u64 = MAX_SUPPLY_PARENT * 4;

/// The maximum supply of the QuarterTexts collection, one text per quarter per parent
pub const MAX_SUPPLY_TEXTS: u64 = MAX_SUPPLY_PARENT * 4;

/// The royalty recipient, a multisig. Left empty, the deployer receives royalties.
pub const BENEFICIARY: &str = "";

/// Royalties in basis points (5%)
pub const ROYALTIES_BPS: u64 = 500;

/// The mint price in wei (0.005 BNB)
pub const MINT_PRICE: u128 = 5_000_000_000_000_000;

/// The `Slot` variant of the catalog's `ItemType` enum
pub const PART_TYPE_SLOT: u8 = 1;

/// The `Fixed` variant of the catalog's `ItemType` enum
pub const PART_TYPE_FIXED: u8 = 2;

// --------------
// | Deployment |
// --------------

/// The number of confirmations to wait for on every transaction
pub const NUM_CONFIRMATIONS: u64 = 1;

/// The chain ID of local Hardhat & Anvil nodes, on which verification is skipped
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// The number of seconds to wait before verifying a freshly deployed collection
pub const COLLECTION_VERIFICATION_DELAY_SECS: u64 = 10;

/// The number of seconds to wait before verifying a freshly deployed utility contract
pub const UTILITY_VERIFICATION_DELAY_SECS: u64 = 20;

/// The default RPC URL, that of a local node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default Etherscan-compatible explorer API endpoint
pub const DEFAULT_EXPLORER_API_URL: &str = "https://api.etherscan.io/v2/api";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The extension of the Hardhat debug file accompanying each artifact
pub const DEBUG_FILE_EXTENSION: &str = "dbg.json";

/// The source directory of the RMRK implementations
pub const RMRK_IMPLEMENTATIONS_DIR: &str = "@rmrk-team/evm-contracts/contracts/implementations";

/// The source directory of the RMRK utility contracts
pub const RMRK_UTILS_DIR: &str = "@rmrk-team/evm-contracts/contracts/RMRK/utils";

/// The source directory of the project's own contracts
pub const PROJECT_CONTRACTS_DIR: &str = "contracts";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_child_supply_matches_quarters() {
        assert_eq!(MAX_SUPPLY_BOXES, 4 * MAX_SUPPLY_PARENT);
        assert_eq!(MAX_SUPPLY_TEXTS, 4 * MAX_SUPPLY_PARENT);
    }

    #[test]
    fn test_slot_ids_distinct() {
        let ids: HashSet<u64> = CHILD_SLOTS.iter().map(|slot| slot.slot_id).collect();
        assert_eq!(ids.len(), CHILD_SLOTS.len());
        assert!(!ids.contains(&PARENT_EQUIPPABLE_GROUP_ID));
    }

    #[test]
    fn test_metadata_uris_share_base() {
        assert!(!BASE_METADATA_URI.ends_with('/'));
        for slot in CHILD_SLOTS.iter() {
            assert!(slot.slot_metadata.starts_with(BASE_METADATA_URI));
            assert!(slot.asset_base_uri.starts_with(BASE_METADATA_URI));
            assert!(slot.asset_base_uri.ends_with("/assets/"));
        }
        assert_eq!(
            Q3_TEXT_SLOT_METADATA,
            "ipfs://QmRJ3TadbE9hbQvF677F6V4GdqrqiEtugrjeu491iRUgZW/catalog/q3_text.json"
        );
    }

    #[test]
    fn test_collection_metadata_uris() {
        assert_eq!(COLLECTION_METADATA_PLACEHOLDER, "ipfs://TODO/collection");

        let expected = [
            (Q1_BOX_COLLECTION_METADATA, "q1_box"),
            (Q2_BOX_COLLECTION_METADATA, "q2_box"),
            (Q3_BOX_COLLECTION_METADATA, "q3_box"),
            (Q4_BOX_COLLECTION_METADATA, "q4_box"),
            (Q1_TEXT_COLLECTION_METADATA, "q1_text"),
            (Q2_TEXT_COLLECTION_METADATA, "q2_text"),
            (Q3_TEXT_COLLECTION_METADATA, "q3_text"),
            (Q4_TEXT_COLLECTION_METADATA, "q4_text"),
        ];
        for (uri, dir) in expected {
            assert_eq!(uri, format!("{BASE_METADATA_URI}/{dir}/metadata.json"));
        }
        assert_eq!(
            Q2_TEXT_COLLECTION_METADATA,
            "ipfs://QmRJ3TadbE9hbQvF677F6V4GdqrqiEtugrjeu491iRUgZW/q2_text/metadata.json"
        );

        for slot in CHILD_SLOTS.iter() {
            let dir = slot.asset_base_uri.trim_end_matches("assets/");
            assert_eq!(slot.collection_metadata, format!("{dir}metadata.json"));
        }
    }

    #[test]
    fn test_each_collection_fills_every_quarter() {
        for collection in [ChildCollection::QuarterBoxes, ChildCollection::QuarterTexts] {
            let quarters: Vec<u8> = CHILD_SLOTS
                .iter()
                .filter(|slot| slot.collection == collection)
                .map(|slot| slot.quarter)
                .collect();
            assert_eq!(quarters, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_texts_render_above_boxes() {
        assert!(TEXT_Z_INDEX > BOX_Z_INDEX);
        assert_ne!(PART_TYPE_SLOT, PART_TYPE_FIXED);
    }
}
