use std::collections::HashMap;

use batchtx_cli_types::{ChainId, Environment};
use ethers::types::Address;
use lazy_static::lazy_static;
use serde::Serialize;

// Nitro contracts are CREATE2-deployed at the same address on every chain
// within an environment.
const MAINNET_ASSET_FORWARDER: &str = "0xC21e4ebD1d92036Cb467b53fE3258F219d909Eb9";
const MAINNET_DEXSPAN: &str = "0x44a57c9ed04b162b93dd36bdc04b8a487ba7b188";
const TESTNET_ASSET_FORWARDER: &str = "0x0af5a7d06e94a1a98bcc0505bea5ab1eb51b7fee";
const TESTNET_DEXSPAN: &str = "0x9f5bd2ad60966e535955dcdb224924c5dbc2f9d7";

/// Sentinel address for the chain's native asset, as adapters expect it.
const NATIVE: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Protocol and token addresses for one chain.
///
/// The required fields exist on every supported chain; the optional ones
/// are protocol integrations that only exist where the protocol does.
#[derive(Debug, Clone, Serialize)]
pub struct ChainConstants {
    pub wrapped_native: Address,
    pub asset_forwarder: Address,
    pub dexspan: Address,
    pub usdc: Option<Address>,
    pub aave_v3_pool: Option<Address>,
    pub compound_usdc_market: Option<Address>,
    pub lido_steth: Option<Address>,
    pub stader_pool: Option<Address>,
    pub benqi_savax: Option<Address>,
    pub ankr_bnb: Option<Address>,
    pub venus_vbnb: Option<Address>,
}

impl ChainConstants {
    fn new(wrapped_native: &str, asset_forwarder: &str, dexspan: &str) -> Self {
        Self {
            wrapped_native: addr(wrapped_native),
            asset_forwarder: addr(asset_forwarder),
            dexspan: addr(dexspan),
            usdc: None,
            aave_v3_pool: None,
            compound_usdc_market: None,
            lido_steth: None,
            stader_pool: None,
            benqi_savax: None,
            ankr_bnb: None,
            venus_vbnb: None,
        }
    }

    fn with_usdc(mut self, address: &str) -> Self {
        self.usdc = Some(addr(address));
        self
    }

    fn with_aave_v3_pool(mut self, address: &str) -> Self {
        self.aave_v3_pool = Some(addr(address));
        self
    }

    fn with_compound_usdc_market(mut self, address: &str) -> Self {
        self.compound_usdc_market = Some(addr(address));
        self
    }

    fn with_lido_steth(mut self, address: &str) -> Self {
        self.lido_steth = Some(addr(address));
        self
    }

    fn with_stader_pool(mut self, address: &str) -> Self {
        self.stader_pool = Some(addr(address));
        self
    }

    fn with_benqi_savax(mut self, address: &str) -> Self {
        self.benqi_savax = Some(addr(address));
        self
    }

    fn with_ankr_bnb(mut self, address: &str) -> Self {
        self.ankr_bnb = Some(addr(address));
        self
    }

    fn with_venus_vbnb(mut self, address: &str) -> Self {
        self.venus_vbnb = Some(addr(address));
        self
    }
}

/// The constants registry: chain ID → protocol/token addresses, scoped to
/// a deployment environment.
pub struct Registry {
    chains: HashMap<ChainId, ChainConstants>,
}

lazy_static! {
    static ref MAINNET_REGISTRY: Registry = Registry::mainnet();
    static ref TESTNET_REGISTRY: Registry = Registry::testnet();
}

impl Registry {
    /// The registry for an environment. `local` forks mainnet chains, so it
    /// shares the mainnet tables.
    pub fn for_environment(environment: Environment) -> &'static Registry {
        match environment {
            Environment::Mainnet | Environment::Local => &MAINNET_REGISTRY,
            Environment::Testnet => &TESTNET_REGISTRY,
        }
    }

    /// Constants for one chain. Unknown chains are an error, not a panic.
    pub fn constants(&self, chain_id: ChainId) -> anyhow::Result<&ChainConstants> {
        self.chains.get(&chain_id).ok_or_else(|| {
            anyhow::anyhow!(
                "No constants registered for chain {chain_id}; known chains: {:?}",
                self.chain_ids()
                    .iter()
                    .map(|id| id.as_u64())
                    .collect::<Vec<_>>()
            )
        })
    }

    pub fn chain_ids(&self) -> Vec<ChainId> {
        let mut ids: Vec<_> = self.chains.keys().copied().collect();
        ids.sort();
        ids
    }

    fn mainnet() -> Self {
        let mut chains = HashMap::new();
        chains.insert(
            ChainId::new(1),
            ChainConstants::new(
                "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
            .with_aave_v3_pool("0x87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2")
            .with_compound_usdc_market("0xc3d688B66703497DAA19211EEdff47f25384cdc3")
            .with_lido_steth("0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84")
            .with_stader_pool("0xcf5EA1b38380f6aF39068375516Daf40Ed70D299"),
        );
        chains.insert(
            ChainId::new(10),
            ChainConstants::new(
                "0x4200000000000000000000000000000000000006",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85")
            .with_aave_v3_pool("0x794a61358D6845594F94dc1DB02A252b5b4814aD"),
        );
        chains.insert(
            ChainId::new(56),
            ChainConstants::new(
                "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d")
            .with_ankr_bnb("0x52F24a5e03aee338Da5fd9Df68D2b6FAe1178827")
            .with_venus_vbnb("0xA07c5b74C9B40447a954e1466938b865b6BBea36"),
        );
        chains.insert(
            ChainId::new(137),
            ChainConstants::new(
                "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359")
            .with_aave_v3_pool("0x794a61358D6845594F94dc1DB02A252b5b4814aD"),
        );
        chains.insert(
            ChainId::new(8453),
            ChainConstants::new(
                "0x4200000000000000000000000000000000000006",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")
            .with_aave_v3_pool("0xA238Dd80C259a72e81d7e4664a9801593F98d1c5")
            .with_compound_usdc_market("0xb125E6687d4313864e53df431d5425969c15Eb2F"),
        );
        chains.insert(
            ChainId::new(42161),
            ChainConstants::new(
                "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0xaf88d065e77c8cC2239327C5EDb3A432268e5831")
            .with_aave_v3_pool("0x794a61358D6845594F94dc1DB02A252b5b4814aD")
            .with_compound_usdc_market("0x9c4ec768c28520B50860ea7a15bd7213a9fF58bf"),
        );
        chains.insert(
            ChainId::new(43114),
            ChainConstants::new(
                "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7",
                MAINNET_ASSET_FORWARDER,
                MAINNET_DEXSPAN,
            )
            .with_usdc("0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E")
            .with_aave_v3_pool("0x794a61358D6845594F94dc1DB02A252b5b4814aD")
            .with_benqi_savax("0x2b2C81e08f1Af8835a78Bb2A90AE924ACE0eA4bE"),
        );

        Self { chains }
    }

    fn testnet() -> Self {
        let mut chains = HashMap::new();
        chains.insert(
            ChainId::new(11155111),
            ChainConstants::new(
                "0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14",
                TESTNET_ASSET_FORWARDER,
                TESTNET_DEXSPAN,
            )
            .with_usdc("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238")
            .with_aave_v3_pool("0x6Ae43d3271ff6888e7Fc43Fd7321a503ff738951"),
        );
        chains.insert(
            ChainId::new(43113),
            ChainConstants::new(
                "0xd00ae08403B9bbb9124bB305C09058E32C39A48c",
                TESTNET_ASSET_FORWARDER,
                TESTNET_DEXSPAN,
            )
            .with_usdc("0x5425890298aed601595a70AB815c96711a31Bc65"),
        );
        chains.insert(
            ChainId::new(80002),
            ChainConstants::new(
                "0x360ad4f9a9A8EFe9A8DCB5f461c4Cc1047E1Dcf9",
                TESTNET_ASSET_FORWARDER,
                TESTNET_DEXSPAN,
            ),
        );

        Self { chains }
    }
}

/// The native-asset sentinel passed to adapter constructors.
pub fn native_token() -> Address {
    addr(NATIVE)
}

/// Unwrap an optional registry entry, naming the missing key and chain.
pub fn require_address(
    value: Option<Address>,
    what: &str,
    chain_id: ChainId,
) -> anyhow::Result<Address> {
    value.ok_or_else(|| anyhow::anyhow!("{what} is not configured for chain {chain_id}"))
}

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mainnet_chain_has_core_contracts() {
        let registry = Registry::for_environment(Environment::Mainnet);
        for chain_id in registry.chain_ids() {
            let constants = registry.constants(chain_id).unwrap();
            assert_ne!(constants.wrapped_native, Address::zero());
            assert_ne!(constants.asset_forwarder, Address::zero());
            assert_ne!(constants.dexspan, Address::zero());
        }
    }

    #[test]
    fn local_environment_shares_mainnet_tables() {
        let local = Registry::for_environment(Environment::Local);
        let mainnet = Registry::for_environment(Environment::Mainnet);
        assert_eq!(local.chain_ids(), mainnet.chain_ids());
    }

    #[test]
    fn unknown_chain_is_a_readable_error() {
        let registry = Registry::for_environment(Environment::Testnet);
        let err = registry.constants(ChainId::new(999)).unwrap_err();
        assert!(err.to_string().contains("chain 999"));
    }

    #[test]
    fn missing_protocol_entry_names_the_key() {
        let registry = Registry::for_environment(Environment::Mainnet);
        let polygon = registry.constants(ChainId::new(137)).unwrap();
        let err =
            require_address(polygon.lido_steth, "lido_steth", ChainId::new(137)).unwrap_err();
        assert!(err.to_string().contains("lido_steth"));
        assert!(err.to_string().contains("137"));
    }
}
