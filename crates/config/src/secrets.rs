use anyhow::Context;
use batchtx_cli_common::wallets::Wallet;
use batchtx_cli_types::Environment;
use ethers::types::{Address, H256};
use secrecy::{ExposeSecret, SecretString};

use crate::consts::{
    ENV_VAR_DEFAULT_REFUND_ADDRESS, ENV_VAR_ENVIRONMENT, ENV_VAR_OWNER, ENV_VAR_PRIVATE_KEY,
};

/// Operator-supplied secrets, read from the environment at invocation time
/// and never persisted.
#[derive(Debug, Clone)]
pub struct DeployerSecrets {
    pub wallet: Wallet,
    pub owner: Option<Address>,
    pub default_refund_address: Option<Address>,
}

impl DeployerSecrets {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = SecretString::new(
            std::env::var(ENV_VAR_PRIVATE_KEY)
                .with_context(|| format!("{ENV_VAR_PRIVATE_KEY} is not set"))?,
        );
        let private_key = parse_private_key(raw.expose_secret())?;
        let wallet = Wallet::from_private_key(private_key)?;

        Ok(Self {
            wallet,
            owner: parse_optional_address(ENV_VAR_OWNER)?,
            default_refund_address: parse_optional_address(ENV_VAR_DEFAULT_REFUND_ADDRESS)?,
        })
    }

    /// The intended protocol owner; falls back to the deployer itself.
    pub fn owner_or_deployer(&self) -> Address {
        self.owner.unwrap_or(self.wallet.address)
    }
}

/// The environment selected via `ENV`, if any.
pub fn environment_from_env() -> anyhow::Result<Option<Environment>> {
    match std::env::var(ENV_VAR_ENVIRONMENT) {
        Ok(raw) => {
            let environment = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("{ENV_VAR_ENVIRONMENT}={raw} is not a known environment"))?;
            Ok(Some(environment))
        }
        Err(_) => Ok(None),
    }
}

fn parse_private_key(raw: &str) -> anyhow::Result<H256> {
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{ENV_VAR_PRIVATE_KEY} is not a 32-byte hex string"))
}

fn parse_optional_address(var: &str) -> anyhow::Result<Option<Address>> {
    match std::env::var(var) {
        Ok(raw) => {
            let address = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("{var}={raw} is not a valid address"))?;
            Ok(Some(address))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers the whole env surface: the variables are process-wide
    // and parallel tests would race on them.
    #[test]
    fn reads_secrets_and_environment_from_env() {
        std::env::set_var(
            ENV_VAR_PRIVATE_KEY,
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        );
        std::env::set_var(ENV_VAR_OWNER, "0x000000000000000000000000000000000000feed");
        std::env::remove_var(ENV_VAR_DEFAULT_REFUND_ADDRESS);
        std::env::set_var(ENV_VAR_ENVIRONMENT, "mainnet");

        let secrets = DeployerSecrets::from_env().unwrap();
        assert_eq!(
            secrets.wallet.address,
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(secrets.owner_or_deployer(), secrets.owner.unwrap());
        assert_eq!(secrets.default_refund_address, None);

        assert_eq!(
            environment_from_env().unwrap(),
            Some(Environment::Mainnet)
        );

        std::env::set_var(ENV_VAR_ENVIRONMENT, "prod");
        assert!(environment_from_env().is_err());
        std::env::remove_var(ENV_VAR_ENVIRONMENT);
        assert_eq!(environment_from_env().unwrap(), None);
    }
}
