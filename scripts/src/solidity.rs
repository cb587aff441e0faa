//! Definitions of Solidity functions called during deployment & configuration

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IRMRKCatalog {
        struct Part {
            uint8 itemType;
            uint8 z;
            address[] equippable;
            string metadataURI;
        }

        struct IntakeStruct {
            uint64 partId;
            Part part;
        }

        function addPartList(IntakeStruct[] memory partIntake) external;
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IRMRKEquippable {
        function addEquippableAssetEntry(
            uint64 equippableGroupId,
            address catalogAddress,
            string memory metadataURI,
            uint64[] memory partIds
        ) external returns (uint256);

        function setValidParentForEquippableGroup(
            uint64 equippableGroupId,
            address parentAddress,
            uint64 partId
        ) external;

        function setAutoAcceptCollection(address collection, bool autoAccept) external;
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ISingularRegistry {
        function addExternalCollection(
            address collection,
            string memory collectionMetadata
        ) external;
    }
}
