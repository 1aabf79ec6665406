use anyhow::Context;
use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use serde::{Deserialize, Serialize};

/// A deployer or operator account. The private key is optional so that
/// read-only flows (inspection, verification) can carry just the address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub private_key: Option<H256>,
}

impl Wallet {
    /// Build a wallet from a raw private key, deriving its address.
    pub fn from_private_key(private_key: H256) -> anyhow::Result<Self> {
        let signer = LocalWallet::from_bytes(private_key.as_bytes())
            .context("Invalid private key")?;
        Ok(Self {
            address: signer.address(),
            private_key: Some(private_key),
        })
    }

    pub fn from_address(address: Address) -> Self {
        Self {
            address,
            private_key: None,
        }
    }

    pub fn private_key_h256(&self) -> Option<H256> {
        self.private_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_the_expected_address() {
        let pk = H256::from_low_u64_be(1);
        let wallet = Wallet::from_private_key(pk).unwrap();
        // Address of the secp256k1 key 0x...01, a standard test vector.
        let expected: Address = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
            .parse()
            .unwrap();
        assert_eq!(wallet.address, expected);
        assert_eq!(wallet.private_key_h256(), Some(pk));
    }

    #[test]
    fn zero_key_is_rejected() {
        assert!(Wallet::from_private_key(H256::zero()).is_err());
    }
}
