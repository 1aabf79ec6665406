use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Explorer verification backend for a network.
///
/// The string form matches what `forge verify-contract --verifier` accepts.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerifierKind {
    #[default]
    Etherscan,
    Blockscout,
    Sourcify,
}
