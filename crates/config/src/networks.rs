use anyhow::Context;
use batchtx_cli_types::{ChainId, VerifierKind};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    consts::NETWORKS_FILE,
    traits::{FileConfigTrait, FileConfigWithDefaultName},
};

/// The set of networks the stack can deploy to, read from
/// `config/networks.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworksConfig {
    pub networks: Vec<NetworkConfig>,
}

impl NetworksConfig {
    pub fn by_name(&self, name: &str) -> anyhow::Result<&NetworkConfig> {
        self.networks
            .iter()
            .find(|network| network.name == name)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Network {name} is not configured; known networks: {:?}",
                    self.names()
                )
            })
    }

    pub fn by_chain_id(&self, chain_id: ChainId) -> anyhow::Result<&NetworkConfig> {
        self.networks
            .iter()
            .find(|network| network.chain_id == chain_id)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No configured network with chain id {chain_id}; known networks: {:?}",
                    self.names()
                )
            })
    }

    fn names(&self) -> Vec<&str> {
        self.networks
            .iter()
            .map(|network| network.name.as_str())
            .collect()
    }
}

impl FileConfigWithDefaultName for NetworksConfig {
    const FILE_NAME: &'static str = NETWORKS_FILE;
}

impl FileConfigTrait for NetworksConfig {}

/// One deployable network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: ChainId,
    /// Explicit RPC URL. When absent the URL comes from an environment
    /// variable instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<Url>,
    /// Environment variable holding the RPC URL. Defaults to
    /// `<NAME>_RPC_URL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url_env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<VerifierConfig>,
}

impl NetworkConfig {
    /// Resolve the RPC URL: an explicit URL wins, otherwise the configured
    /// (or derived) environment variable must be set.
    pub fn resolve_rpc_url(&self) -> anyhow::Result<Url> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }
        let var = self
            .rpc_url_env
            .clone()
            .unwrap_or_else(|| default_rpc_url_env(&self.name));
        let raw = std::env::var(&var).with_context(|| {
            format!(
                "No RPC URL for network {}: set {var} or add rpc_url to {NETWORKS_FILE}",
                self.name
            )
        })?;
        raw.parse()
            .with_context(|| format!("{var} does not contain a valid URL"))
    }
}

/// Explorer verification settings for one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    pub kind: VerifierKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// Environment variable holding the explorer API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl VerifierConfig {
    pub fn api_key(&self) -> Option<String> {
        self.api_key_env
            .as_ref()
            .and_then(|var| std::env::var(var).ok())
    }
}

/// `polygon-amoy` → `POLYGON_AMOY_RPC_URL`.
pub fn default_rpc_url_env(name: &str) -> String {
    format!("{}_RPC_URL", name.to_uppercase().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(name: &str, chain_id: u64) -> NetworkConfig {
        NetworkConfig {
            name: name.to_string(),
            chain_id: ChainId::new(chain_id),
            rpc_url: None,
            rpc_url_env: None,
            verifier: None,
        }
    }

    #[test]
    fn derives_the_rpc_env_var_name() {
        assert_eq!(default_rpc_url_env("polygon-amoy"), "POLYGON_AMOY_RPC_URL");
        assert_eq!(default_rpc_url_env("ethereum"), "ETHEREUM_RPC_URL");
    }

    #[test]
    fn explicit_url_wins_over_env() {
        let mut config = network("base", 8453);
        config.rpc_url = Some("https://mainnet.base.org".parse().unwrap());
        let url = config.resolve_rpc_url().unwrap();
        assert_eq!(url.as_str(), "https://mainnet.base.org/");
    }

    #[test]
    fn env_var_fallback_and_missing_var_error() {
        let mut config = network("unit-test-net", 31337);
        config.rpc_url_env = Some("UNIT_TEST_NET_RPC_URL_FOR_TESTS".to_string());

        let err = config.resolve_rpc_url().unwrap_err();
        assert!(err.to_string().contains("UNIT_TEST_NET_RPC_URL_FOR_TESTS"));

        std::env::set_var("UNIT_TEST_NET_RPC_URL_FOR_TESTS", "http://127.0.0.1:8545");
        let url = config.resolve_rpc_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8545/");
    }

    #[test]
    fn unknown_network_lookup_lists_known_names() {
        let config = NetworksConfig {
            networks: vec![network("ethereum", 1), network("polygon", 137)],
        };
        let err = config.by_name("solana").unwrap_err();
        assert!(err.to_string().contains("ethereum"));
        assert!(config.by_chain_id(ChainId::new(137)).is_ok());
        assert!(config.by_chain_id(ChainId::new(999)).is_err());
    }
}
