use std::sync::Arc;

use anyhow::Context;
use batchtx_cli_common::{
    ethereum::{create_ethers_client, deploy_contract, EthersClient},
    logger,
    spinner::Spinner,
    PromptConfirm,
};
use batchtx_cli_config::{
    ChainConstants, ContractArtifact, DeployerSecrets, DeploymentRecord, NetworkConfig,
    Registry, StackConfig,
};
use batchtx_cli_types::Environment;
use chrono::Utc;
use ethers::{
    abi::{encode, Token},
    types::{Address, Bytes},
};
use url::Url;
use xshell::Shell;

use crate::{
    messages::{
        msg_confirm_mainnet_deploy, msg_contract_deployed, msg_deploying_contract,
        MSG_DEPLOY_ABORTED,
    },
    utils::{
        balance::check_the_balance,
        verifier::{build_verifier, verify_one},
    },
};

/// Everything a deploy command needs about the selected network, resolved
/// once up front so every missing-configuration error fires before the
/// first transaction is broadcast.
pub(crate) struct DeployTarget {
    pub stack: StackConfig,
    pub environment: Environment,
    pub network: NetworkConfig,
    pub rpc_url: Url,
    pub constants: &'static ChainConstants,
    pub secrets: DeployerSecrets,
    pub client: Arc<EthersClient>,
}

pub(crate) async fn prepare(shell: &Shell) -> anyhow::Result<DeployTarget> {
    let stack = StackConfig::from_file(shell)?;
    let environment = stack.environment()?;
    let network = stack.load_current_network()?;

    if environment == Environment::Mainnet
        && !PromptConfirm::new(&msg_confirm_mainnet_deploy(&network.name))
            .default(false)
            .ask()
    {
        anyhow::bail!(MSG_DEPLOY_ABORTED);
    }

    let rpc_url = network.resolve_rpc_url()?;
    let constants = Registry::for_environment(environment).constants(network.chain_id)?;
    let secrets = DeployerSecrets::from_env()?;

    let private_key = secrets
        .wallet
        .private_key_h256()
        .context("Deployer wallet has no private key")?;
    let client = Arc::new(create_ethers_client(
        private_key,
        rpc_url.to_string(),
        Some(network.chain_id.as_u64()),
    )?);

    check_the_balance(&rpc_url, secrets.wallet.address).await?;

    Ok(DeployTarget {
        stack,
        environment,
        network,
        rpc_url,
        constants,
        secrets,
        client,
    })
}

/// Deploy one contract from its forge artifact, persist the record, and
/// optionally verify it right away.
pub(crate) async fn deploy_and_record(
    shell: &Shell,
    target: &DeployTarget,
    contract_name: &str,
    constructor_args: Vec<Token>,
    verify: bool,
) -> anyhow::Result<Address> {
    let artifact = ContractArtifact::read(shell, &target.stack.link_to_contracts(), contract_name)?;
    let encoded_args: Bytes = encode(&constructor_args).into();

    let spinner = Spinner::new(&msg_deploying_contract(contract_name, &target.network.name));
    let deployed = deploy_contract(
        target.client.clone(),
        artifact.abi.clone(),
        artifact.creation_bytecode(),
        constructor_args,
    )
    .await?;

    let mut deployments = target.stack.load_deployments()?;
    deployments.record(
        target.environment,
        target.network.chain_id,
        contract_name,
        DeploymentRecord {
            address: deployed.address,
            deployer: target.secrets.wallet.address,
            transaction_hash: deployed.transaction_hash,
            deployed_at: Utc::now(),
            constructor_args: encoded_args.clone(),
        },
    );
    target.stack.save_deployments(&deployments)?;
    spinner.finish();
    logger::success(msg_contract_deployed(contract_name, deployed.address));

    if verify {
        verify_deployed(shell, target, contract_name, deployed.address, encoded_args)?;
    }
    Ok(deployed.address)
}

pub(crate) fn verify_deployed(
    shell: &Shell,
    target: &DeployTarget,
    contract_name: &str,
    address: Address,
    constructor_args: Bytes,
) -> anyhow::Result<()> {
    let verifier = build_verifier(&target.stack, &target.network, &target.rpc_url)?;
    verify_one(shell, &verifier, contract_name, address, constructor_args)
}

#[cfg(test)]
mod tests {
    use batchtx_cli_config::native_token;
    use ethers::abi::Token;

    use super::*;

    #[test]
    fn constructor_args_encode_to_word_aligned_bytes() {
        let tokens = vec![
            Token::Address(native_token()),
            Token::Address(Address::zero()),
            Token::Uint(0u64.into()),
        ];
        let encoded: Bytes = encode(&tokens).into();
        assert_eq!(encoded.len(), 32 * 3);
    }
}
