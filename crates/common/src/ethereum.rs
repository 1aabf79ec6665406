use std::{sync::Arc, time::Duration};

use anyhow::Context;
use ethers::{
    abi::{Abi, Token},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, Bytes, H256, U256, U64},
};

pub type EthersClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub fn create_ethers_client(
    private_key: H256,
    rpc_url: String,
    chain_id: Option<u64>,
) -> anyhow::Result<EthersClient> {
    let mut wallet = LocalWallet::from_bytes(private_key.as_bytes())
        .context("Invalid deployer private key")?;
    if let Some(chain_id) = chain_id {
        wallet = wallet.with_chain_id(chain_id);
    }
    let provider = Provider::<Http>::try_from(rpc_url.as_str())
        .with_context(|| format!("Invalid RPC URL {rpc_url}"))?;
    Ok(SignerMiddleware::new(provider, wallet))
}

pub fn create_ethers_provider(rpc_url: &str) -> anyhow::Result<Provider<Http>> {
    Provider::<Http>::try_from(rpc_url).with_context(|| format!("Invalid RPC URL {rpc_url}"))
}

/// Result of a successful contract creation.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub address: Address,
    pub transaction_hash: H256,
    pub block_number: Option<U64>,
}

/// Deploy a contract from its ABI and creation bytecode, waiting for the
/// deployment transaction to be mined.
pub async fn deploy_contract(
    client: Arc<EthersClient>,
    abi: Abi,
    bytecode: Bytes,
    constructor_args: Vec<Token>,
) -> anyhow::Result<DeployedContract> {
    let factory = ContractFactory::new(abi, bytecode, client);
    let deployer = factory
        .deploy_tokens(constructor_args)
        .context("Constructor arguments do not match the contract ABI")?;
    let (contract, receipt) = deployer
        .send_with_receipt()
        .await
        .context("Deployment transaction failed")?;
    Ok(DeployedContract {
        address: contract.address(),
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}

pub async fn get_the_balance(rpc_url: &str, address: Address) -> anyhow::Result<U256> {
    let provider = create_ethers_provider(rpc_url)?;
    provider
        .get_balance(address, None)
        .await
        .with_context(|| format!("Failed to query the balance of {address:#x}"))
}

/// Poll `eth_chainId` until the endpoint answers or the timeout elapses.
pub async fn wait_for_rpc(rpc_url: &str, timeout: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "method": "eth_chainId",
        "params": [],
        "id": 1,
    });

    let deadline = std::time::Instant::now() + timeout;
    loop {
        let response = client.post(rpc_url).json(&request).send().await;
        if matches!(&response, Ok(resp) if resp.status().is_success()) {
            return Ok(());
        }
        if std::time::Instant::now() > deadline {
            anyhow::bail!("Timed out waiting for RPC endpoint {rpc_url} to become ready");
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}
