use std::path::{Path, PathBuf};

use batchtx_cli_types::VerifierKind;
use ethers::types::{Address, Bytes};
use url::Url;
use xshell::{cmd, Shell};

use crate::cmd::Cmd;

/// Install JS dependencies and compile the protocol's Solidity checkout.
pub fn build_protocol_contracts(shell: &Shell, contracts_path: &Path) -> anyhow::Result<()> {
    let _dir_guard = shell.push_dir(contracts_path);
    Cmd::new(cmd!(shell, "yarn install --frozen-lockfile")).run()?;
    Ok(Cmd::new(cmd!(shell, "forge build")).run()?)
}

/// Explorer verification settings for one network.
pub struct Verifier {
    pub contracts_path: PathBuf,
    pub rpc_url: Url,
    pub kind: VerifierKind,
    pub verifier_url: Option<Url>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContractSpec {
    pub name: String,
    pub address: Address,
    pub constructor_args: Bytes,
}

impl Verifier {
    /// Submit one contract to the explorer's verification API and wait for
    /// the submission to be accepted or rejected.
    pub fn verify_contract(&self, shell: &Shell, spec: &ContractSpec) -> anyhow::Result<()> {
        let _dir_guard = shell.push_dir(&self.contracts_path);
        let rpc_url = self.rpc_url.to_string();
        let verifier = self.kind.to_string();
        let address = format!("{:#x}", spec.address);
        let name = spec.name.clone();
        let constructor_args = spec.constructor_args.to_string();

        let mut verifier_args: Vec<String> = Vec::new();
        if let Some(url) = &self.verifier_url {
            verifier_args.push("--verifier-url".to_string());
            verifier_args.push(url.to_string());
        }
        if let Some(key) = &self.api_key {
            verifier_args.push("--etherscan-api-key".to_string());
            verifier_args.push(key.clone());
        }

        Ok(Cmd::new(cmd!(shell, "forge verify-contract --watch --rpc-url {rpc_url} --verifier {verifier} {verifier_args...} {address} {name} --constructor-args {constructor_args}")).with_force_run().run()?)
    }
}
