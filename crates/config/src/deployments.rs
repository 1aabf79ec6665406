use std::{collections::BTreeMap, path::Path};

use batchtx_cli_types::{ChainId, Environment};
use chrono::{DateTime, Utc};
use ethers::types::{Address, Bytes, H256};
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::{
    consts::DEPLOYMENTS_FILE,
    traits::{FileConfigTrait, FileConfigWithDefaultName, ReadConfig},
};

/// One recorded contract deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub address: Address,
    pub deployer: Address,
    pub transaction_hash: H256,
    pub deployed_at: DateTime<Utc>,
    /// ABI-encoded constructor arguments, kept for explorer verification.
    pub constructor_args: Bytes,
}

/// The deployment record store: environment → chain ID → contract name →
/// record, persisted as pretty-printed JSON.
///
/// `BTreeMap`s keep the serialized form deterministic so the file diffs
/// cleanly between deployments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentsConfig(
    BTreeMap<Environment, BTreeMap<ChainId, BTreeMap<String, DeploymentRecord>>>,
);

impl DeploymentsConfig {
    /// Read the record file, or start an empty store when it does not exist
    /// yet. A present-but-malformed file is an error, never silently reset.
    pub fn read_or_default(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if !shell.path_exists(path.as_ref()) {
            return Ok(Self::default());
        }
        <Self as ReadConfig>::read(shell, path)
    }

    /// Look up a record. Every missing level of the key path is an error
    /// naming the full path.
    pub fn get(
        &self,
        environment: Environment,
        chain_id: ChainId,
        contract: &str,
    ) -> anyhow::Result<&DeploymentRecord> {
        self.0
            .get(&environment)
            .and_then(|chains| chains.get(&chain_id))
            .and_then(|contracts| contracts.get(contract))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No deployment recorded for {environment}.{chain_id}.{contract} — \
                     deploy it first"
                )
            })
    }

    pub fn address_of(
        &self,
        environment: Environment,
        chain_id: ChainId,
        contract: &str,
    ) -> anyhow::Result<Address> {
        Ok(self.get(environment, chain_id, contract)?.address)
    }

    /// Insert or replace a record, creating intermediate levels on demand.
    pub fn record(
        &mut self,
        environment: Environment,
        chain_id: ChainId,
        contract: impl Into<String>,
        record: DeploymentRecord,
    ) {
        self.0
            .entry(environment)
            .or_default()
            .entry(chain_id)
            .or_default()
            .insert(contract.into(), record);
    }

    /// All contracts recorded for one chain, if any.
    pub fn contracts_on(
        &self,
        environment: Environment,
        chain_id: ChainId,
    ) -> Option<&BTreeMap<String, DeploymentRecord>> {
        self.0.get(&environment)?.get(&chain_id)
    }

    /// Chains that have at least one record in this environment.
    pub fn chains(&self, environment: Environment) -> Vec<ChainId> {
        self.0
            .get(&environment)
            .map(|chains| chains.keys().copied().collect())
            .unwrap_or_default()
    }
}

impl FileConfigWithDefaultName for DeploymentsConfig {
    const FILE_NAME: &'static str = DEPLOYMENTS_FILE;
}

impl FileConfigTrait for DeploymentsConfig {}

#[cfg(test)]
mod tests {
    use crate::traits::SaveConfig;

    use super::*;

    fn sample_record() -> DeploymentRecord {
        DeploymentRecord {
            address: "0x000000000000000000000000000000000000beef".parse().unwrap(),
            deployer: "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".parse().unwrap(),
            transaction_hash: H256::from_low_u64_be(7),
            deployed_at: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .into(),
            constructor_args: Bytes::from(vec![0xde, 0xad]),
        }
    }

    #[test]
    fn records_and_looks_up_through_all_levels() {
        let mut store = DeploymentsConfig::default();
        store.record(
            Environment::Testnet,
            ChainId::new(80002),
            "BatchTransaction",
            sample_record(),
        );

        let record = store
            .get(Environment::Testnet, ChainId::new(80002), "BatchTransaction")
            .unwrap();
        assert_eq!(record.transaction_hash, H256::from_low_u64_be(7));
        assert_eq!(store.chains(Environment::Testnet), vec![ChainId::new(80002)]);
    }

    #[test]
    fn missing_path_errors_name_the_full_key() {
        let store = DeploymentsConfig::default();
        let err = store
            .get(Environment::Mainnet, ChainId::new(137), "DexSpanAdapter")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mainnet"));
        assert!(msg.contains("137"));
        assert!(msg.contains("DexSpanAdapter"));
    }

    #[test]
    fn file_round_trip_preserves_records() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let path = dir.path().join(DEPLOYMENTS_FILE);

        let mut store = DeploymentsConfig::default();
        store.record(
            Environment::Mainnet,
            ChainId::new(1),
            "NitroAdapter",
            sample_record(),
        );
        store.save(&shell, &path).unwrap();

        let read = DeploymentsConfig::read_or_default(&shell, &path).unwrap();
        let record = read
            .get(Environment::Mainnet, ChainId::new(1), "NitroAdapter")
            .unwrap();
        assert_eq!(record.address, sample_record().address);
        assert_eq!(record.constructor_args, sample_record().constructor_args);
    }

    #[test]
    fn serializes_with_string_keys() {
        let mut store = DeploymentsConfig::default();
        store.record(
            Environment::Testnet,
            ChainId::new(43113),
            "BatchTransaction",
            sample_record(),
        );
        let json = serde_json::to_value(&store).unwrap();
        assert!(json["testnet"]["43113"]["BatchTransaction"].is_object());
    }

    #[test]
    fn missing_file_starts_empty() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let store =
            DeploymentsConfig::read_or_default(&shell, dir.path().join(DEPLOYMENTS_FILE)).unwrap();
        assert!(store.chains(Environment::Mainnet).is_empty());
    }
}
