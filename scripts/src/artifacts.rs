//! Loading of the Hardhat compilation artifacts the contracts are deployed from

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::{constants::DEBUG_FILE_EXTENSION, errors::ScriptError, types::Contract};

/// The subset of a Hardhat artifact (`hh-sol-artifact-1`) the scripts use
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The path of the contract's source file
    pub source_name: String,
    /// The hex-encoded creation bytecode
    pub bytecode: String,
}

impl HardhatArtifact {
    /// The creation bytecode of the contract
    pub fn creation_code(&self) -> Result<Bytes, ScriptError> {
        // Unlinked library references leave `__$...$__` placeholders in the bytecode
        if self.bytecode.contains("__") {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has unlinked library references",
                self.contract_name
            )));
        }

        let code = Bytes::from_str(&self.bytecode)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        if code.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} is abstract or an interface",
                self.contract_name
            )));
        }

        Ok(code)
    }
}

/// The subset of a Hardhat debug file (`hh-sol-dbg-1`) the scripts use
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebugFile {
    /// Path of the build info file, relative to the debug file's directory
    build_info: String,
}

/// The compiler invocation that produced a set of artifacts
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// The full compiler version, e.g. `0.8.21+commit.d9974bed`
    pub solc_long_version: String,
    /// The standard JSON input given to the compiler
    pub input: Value,
}

/// Reads the artifact of the given contract from the artifacts directory
pub fn load_artifact(
    artifacts_dir: &Path,
    contract: Contract,
) -> Result<HardhatArtifact, ScriptError> {
    let path = contract.artifact_path(artifacts_dir);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {e}", path.display())))?;

    let artifact: HardhatArtifact = serde_json::from_str(&contents)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    if artifact.contract_name != contract.name() {
        return Err(ScriptError::ArtifactParsing(format!(
            "expected artifact for {}, found {}",
            contract.name(),
            artifact.contract_name
        )));
    }

    Ok(artifact)
}

/// Reads the build info of the compilation that produced the given contract's artifact
pub fn load_build_info(
    artifacts_dir: &Path,
    contract: Contract,
) -> Result<BuildInfo, ScriptError> {
    let debug_path = debug_file_path(&contract.artifact_path(artifacts_dir));
    let contents = fs::read_to_string(&debug_path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {e}", debug_path.display())))?;
    let debug: DebugFile = serde_json::from_str(&contents)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let build_info_path = debug_path
        .parent()
        .ok_or_else(|| ScriptError::ArtifactParsing("debug file has no parent".to_string()))?
        .join(debug.build_info);
    let contents = fs::read_to_string(&build_info_path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {e}", build_info_path.display())))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// `Roadmap.json` -> `Roadmap.dbg.json`
fn debug_file_path(artifact_path: &Path) -> PathBuf {
    artifact_path.with_extension(DEBUG_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use serde_json::json;
    use tempfile::tempdir;

    use crate::types::Contract;

    use super::{load_artifact, load_build_info};

    /// Writes a minimal Hardhat layout for the given contract under `root`
    fn write_artifacts(root: &Path, contract: Contract, bytecode: &str) {
        let artifact_path = contract.artifact_path(root);
        fs::create_dir_all(artifact_path.parent().unwrap()).unwrap();

        let artifact = json!({
            "_format": "hh-sol-artifact-1",
            "contractName": contract.name(),
            "sourceName": contract.source_name(),
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": "0x",
            "linkReferences": {},
            "deployedLinkReferences": {},
        });
        fs::write(&artifact_path, artifact.to_string()).unwrap();

        let depth = contract.source_name().matches('/').count() + 1;
        let build_info = format!("{}build-info/abc123.json", "../".repeat(depth));
        let debug = json!({ "_format": "hh-sol-dbg-1", "buildInfo": build_info });
        fs::write(artifact_path.with_extension("dbg.json"), debug.to_string()).unwrap();

        fs::create_dir_all(root.join("build-info")).unwrap();
        let info = json!({
            "solcVersion": "0.8.21",
            "solcLongVersion": "0.8.21+commit.d9974bed",
            "input": { "language": "Solidity", "sources": {} },
        });
        fs::write(root.join("build-info/abc123.json"), info.to_string()).unwrap();
    }

    #[test]
    fn test_load_artifact() {
        let dir = tempdir().unwrap();
        write_artifacts(dir.path(), Contract::Roadmap, "0x6080604052");

        let artifact = load_artifact(dir.path(), Contract::Roadmap).unwrap();
        assert_eq!(artifact.source_name, "contracts/Roadmap.sol");
        assert_eq!(
            artifact.creation_code().unwrap().to_vec(),
            vec![0x60, 0x80, 0x60, 0x40, 0x52]
        );
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempdir().unwrap();
        assert!(load_artifact(dir.path(), Contract::QuarterBoxes).is_err());
    }

    #[test]
    fn test_unlinked_bytecode_rejected() {
        let dir = tempdir().unwrap();
        write_artifacts(
            dir.path(),
            Contract::BulkWriter,
            "0x6080__$b3a9c0e7f1d2c3b4a5968778695a4b3c2d$__6040",
        );

        let artifact = load_artifact(dir.path(), Contract::BulkWriter).unwrap();
        assert!(artifact.creation_code().is_err());
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let dir = tempdir().unwrap();
        write_artifacts(dir.path(), Contract::CatalogUtils, "0x");

        let artifact = load_artifact(dir.path(), Contract::CatalogUtils).unwrap();
        assert!(artifact.creation_code().is_err());
    }

    #[test]
    fn test_load_build_info() {
        let dir = tempdir().unwrap();
        write_artifacts(dir.path(), Contract::Catalog, "0x00");

        let info = load_build_info(dir.path(), Contract::Catalog).unwrap();
        assert_eq!(info.solc_long_version, "0.8.21+commit.d9974bed");
        assert_eq!(info.input["language"], "Solidity");
    }
}
