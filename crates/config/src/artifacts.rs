use std::path::{Path, PathBuf};

use anyhow::Context;
use batchtx_cli_common::files::read_json_file;
use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use walkdir::WalkDir;
use xshell::Shell;

use crate::consts::FORGE_OUT_PATH;

/// ABI and creation bytecode of a compiled contract, as forge emits it
/// under `out/<Name>.sol/<Name>.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    pub abi: Abi,
    bytecode: ArtifactBytecode,
}

#[derive(Debug, Clone, Deserialize)]
struct ArtifactBytecode {
    object: Bytes,
}

impl ContractArtifact {
    /// Read the artifact for a named contract from the contracts checkout.
    /// Falls back to scanning `out/` when the source file name does not
    /// match the contract name.
    pub fn read(
        shell: &Shell,
        contracts_path: &Path,
        contract_name: &str,
    ) -> anyhow::Result<Self> {
        let out_dir = contracts_path.join(FORGE_OUT_PATH);
        let direct = out_dir
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"));
        let path = if shell.path_exists(&direct) {
            direct
        } else {
            locate_artifact(&out_dir, contract_name)?
        };

        let artifact: ContractArtifact = read_json_file(shell, &path)
            .with_context(|| format!("Failed to read artifact for {contract_name}"))?;
        if artifact.bytecode.object.is_empty() {
            anyhow::bail!(
                "Artifact for {contract_name} has no creation bytecode — \
                 is it an interface or an unlinked library?"
            );
        }
        Ok(artifact)
    }

    pub fn creation_bytecode(&self) -> Bytes {
        self.bytecode.object.clone()
    }
}

fn locate_artifact(out_dir: &Path, contract_name: &str) -> anyhow::Result<PathBuf> {
    let wanted = format!("{contract_name}.json");
    WalkDir::new(out_dir)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name().to_string_lossy() == wanted)
        .map(|entry| entry.into_path())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No artifact for {contract_name} under {out_dir:?} — run `forge build` first"
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ARTIFACT: &str = r#"{
        "abi": [
            {
                "type": "constructor",
                "inputs": [
                    { "name": "_wrappedNative", "type": "address", "internalType": "address" }
                ],
                "stateMutability": "nonpayable"
            }
        ],
        "bytecode": { "object": "0x6080604052", "sourceMap": "", "linkReferences": {} }
    }"#;

    #[test]
    fn reads_a_forge_artifact() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let artifact_dir = dir.path().join(FORGE_OUT_PATH).join("BatchTransaction.sol");
        shell.create_dir(&artifact_dir).unwrap();
        shell
            .write_file(artifact_dir.join("BatchTransaction.json"), SAMPLE_ARTIFACT)
            .unwrap();

        let artifact = ContractArtifact::read(&shell, dir.path(), "BatchTransaction").unwrap();
        assert!(artifact.abi.constructor.is_some());
        assert_eq!(artifact.creation_bytecode().len(), 5);
    }

    #[test]
    fn falls_back_to_scanning_out() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        // Contract lives in a differently named source file.
        let artifact_dir = dir.path().join(FORGE_OUT_PATH).join("adapters").join("Aave.sol");
        shell.create_dir(&artifact_dir).unwrap();
        shell
            .write_file(artifact_dir.join("AaveV3Supply.json"), SAMPLE_ARTIFACT)
            .unwrap();

        assert!(ContractArtifact::read(&shell, dir.path(), "AaveV3Supply").is_ok());
        let err = ContractArtifact::read(&shell, dir.path(), "Missing").unwrap_err();
        assert!(err.to_string().contains("forge build"));
    }
}
