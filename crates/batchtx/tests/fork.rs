//! Integration tests against forked mainnet state. They need `anvil` on the
//! PATH and an upstream RPC endpoint, so they are ignored by default:
//!
//! ```text
//! ETHEREUM_RPC_URL=https://... cargo test -p batchtx -- --ignored
//! ```

use std::{sync::Arc, time::Duration};

use batchtx_cli_common::{anvil::start_anvil_fork, ethereum::create_ethers_client};
use batchtx_cli_config::Registry;
use batchtx_cli_types::{ChainId, Environment};
use ethers::{
    contract::abigen,
    providers::Middleware,
    types::{H256, U256},
};

abigen!(
    Weth,
    r"[
        function deposit() payable
        function balanceOf(address owner) view returns (uint256)
    ]"
);

// First funded dev account of a default anvil instance.
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[tokio::test]
#[ignore = "needs anvil and an upstream RPC endpoint"]
async fn wrapping_native_moves_balances_on_a_fork() {
    let upstream = std::env::var("ETHEREUM_RPC_URL")
        .expect("set ETHEREUM_RPC_URL to run fork tests");
    let anvil = start_anvil_fork(&upstream, Some(1)).unwrap();
    anvil
        .wait_until_ready(Duration::from_secs(60))
        .await
        .unwrap();

    let private_key: H256 = DEV_PRIVATE_KEY.parse().unwrap();
    let client = Arc::new(
        create_ethers_client(private_key, anvil.rpc_url().to_string(), Some(1)).unwrap(),
    );
    let user = client.address();

    let constants = Registry::for_environment(Environment::Local)
        .constants(ChainId::new(1))
        .unwrap();
    let weth = Weth::new(constants.wrapped_native, client.clone());

    let native_before = client.get_balance(user, None).await.unwrap();
    let wrapped_before = weth.balance_of(user).call().await.unwrap();

    let amount = U256::exp10(18);
    weth.deposit()
        .value(amount)
        .send()
        .await
        .unwrap()
        .confirmations(1)
        .await
        .unwrap();

    let native_after = client.get_balance(user, None).await.unwrap();
    let wrapped_after = weth.balance_of(user).call().await.unwrap();

    assert_eq!(wrapped_after - wrapped_before, amount);
    // Native balance drops by the wrapped amount plus gas.
    assert!(native_before - native_after >= amount);
}

#[tokio::test]
#[ignore = "needs anvil and an upstream RPC endpoint"]
async fn registry_contracts_exist_on_the_fork() {
    let upstream = std::env::var("ETHEREUM_RPC_URL")
        .expect("set ETHEREUM_RPC_URL to run fork tests");
    let anvil = start_anvil_fork(&upstream, Some(1)).unwrap();
    anvil
        .wait_until_ready(Duration::from_secs(60))
        .await
        .unwrap();

    let private_key: H256 = DEV_PRIVATE_KEY.parse().unwrap();
    let client = Arc::new(
        create_ethers_client(private_key, anvil.rpc_url().to_string(), Some(1)).unwrap(),
    );

    let constants = Registry::for_environment(Environment::Local)
        .constants(ChainId::new(1))
        .unwrap();
    for (what, address) in [
        ("wrapped_native", constants.wrapped_native),
        ("usdc", constants.usdc.unwrap()),
        ("aave_v3_pool", constants.aave_v3_pool.unwrap()),
        ("lido_steth", constants.lido_steth.unwrap()),
    ] {
        let code = client.get_code(address, None).await.unwrap();
        assert!(!code.is_empty(), "{what} at {address:#x} has no code");
    }
}
