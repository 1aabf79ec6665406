use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Deployment environment the CLI operates in.
///
/// Selected via the `ENV` environment variable or the stack config; every
/// deployment record is scoped to exactly one environment.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mainnet,
    #[default]
    Testnet,
    /// Anvil forks of mainnet chains, used by the integration harness.
    Local,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(Environment::from_str("mainnet").unwrap(), Environment::Mainnet);
        assert_eq!(Environment::from_str("local").unwrap(), Environment::Local);
        assert!(Environment::from_str("prod").is_err());
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&Environment::Mainnet).unwrap(),
            "\"mainnet\""
        );
        assert_eq!(Environment::Testnet.to_string(), "testnet");
    }
}
