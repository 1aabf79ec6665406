use batchtx_cli_common::{logger, spinner::Spinner};
use batchtx_cli_config::{native_token, require_address, ChainConstants};
use batchtx_cli_types::ChainId;
use clap::{Parser, ValueEnum};
use ethers::{abi::Token, types::Address};
use strum::{Display, EnumIter};
use xshell::Shell;

use super::{
    args::DeployArgs,
    common::{deploy_and_record, prepare, DeployTarget},
};
use crate::{
    abi::BatchTransactionAbi,
    consts::BATCH_TRANSACTION,
    messages::{msg_contract_deployed, MSG_ADAPTER_WHITELISTED, MSG_WHITELISTING_ADAPTER_SPINNER},
};

/// The whitelisted single-protocol adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum AdapterKind {
    AaveV3Supply,
    CompoundSupply,
    LidoStakeEth,
    StaderStakeEth,
    BenqiStakeAvax,
    AnkrStakeBnb,
    VenusSupply,
}

impl AdapterKind {
    pub fn contract_name(&self) -> &'static str {
        match self {
            AdapterKind::AaveV3Supply => "AaveV3Supply",
            AdapterKind::CompoundSupply => "CompoundSupply",
            AdapterKind::LidoStakeEth => "LidoStakeEth",
            AdapterKind::StaderStakeEth => "StaderStakeEth",
            AdapterKind::BenqiStakeAvax => "BenqiStakeAvax",
            AdapterKind::AnkrStakeBnb => "AnkrStakeBnb",
            AdapterKind::VenusSupply => "VenusSupply",
        }
    }

    /// Whether the wrapped protocol exists on this chain at all.
    pub fn is_available(&self, constants: &ChainConstants) -> bool {
        self.protocol_address(constants).is_some()
    }

    /// Constructor args: every adapter takes (native, wrappedNative,
    /// <protocol>...), matching the adapter base contract.
    pub fn constructor_args(
        &self,
        constants: &ChainConstants,
        chain_id: ChainId,
    ) -> anyhow::Result<Vec<Token>> {
        let protocol = require_address(
            self.protocol_address(constants),
            self.protocol_key(),
            chain_id,
        )?;
        let mut args = vec![
            Token::Address(native_token()),
            Token::Address(constants.wrapped_native),
            Token::Address(protocol),
        ];
        match self {
            // Aave referral program is sunset; the code is always 0.
            AdapterKind::AaveV3Supply => args.push(Token::Uint(0u64.into())),
            AdapterKind::LidoStakeEth => args.push(Token::Address(Address::zero())),
            _ => {}
        }
        Ok(args)
    }

    fn protocol_address(&self, constants: &ChainConstants) -> Option<Address> {
        match self {
            AdapterKind::AaveV3Supply => constants.aave_v3_pool,
            AdapterKind::CompoundSupply => constants.compound_usdc_market,
            AdapterKind::LidoStakeEth => constants.lido_steth,
            AdapterKind::StaderStakeEth => constants.stader_pool,
            AdapterKind::BenqiStakeAvax => constants.benqi_savax,
            AdapterKind::AnkrStakeBnb => constants.ankr_bnb,
            AdapterKind::VenusSupply => constants.venus_vbnb,
        }
    }

    fn protocol_key(&self) -> &'static str {
        match self {
            AdapterKind::AaveV3Supply => "aave_v3_pool",
            AdapterKind::CompoundSupply => "compound_usdc_market",
            AdapterKind::LidoStakeEth => "lido_steth",
            AdapterKind::StaderStakeEth => "stader_pool",
            AdapterKind::BenqiStakeAvax => "benqi_savax",
            AdapterKind::AnkrStakeBnb => "ankr_bnb",
            AdapterKind::VenusSupply => "venus_vbnb",
        }
    }
}

#[derive(Debug, Parser)]
pub struct AdapterArgs {
    /// Which adapter to deploy
    #[clap(value_enum)]
    pub kind: AdapterKind,
    #[clap(flatten)]
    pub deploy: DeployArgs,
}

pub async fn run(args: AdapterArgs, shell: &Shell) -> anyhow::Result<()> {
    let target = prepare(shell).await?;
    let address = deploy(shell, &target, args.kind, &args.deploy).await?;
    logger::outro(msg_contract_deployed(args.kind.contract_name(), address));
    Ok(())
}

pub(crate) async fn deploy(
    shell: &Shell,
    target: &DeployTarget,
    kind: AdapterKind,
    args: &DeployArgs,
) -> anyhow::Result<Address> {
    let constructor_args = kind.constructor_args(target.constants, target.network.chain_id)?;
    let address = deploy_and_record(
        shell,
        target,
        kind.contract_name(),
        constructor_args,
        args.verify,
    )
    .await?;
    whitelist_on_batch_transaction(target, address).await?;
    Ok(address)
}

/// Register a freshly deployed adapter on the router. Requires the router
/// to be deployed (and still owned by the deployer) on this chain.
pub(crate) async fn whitelist_on_batch_transaction(
    target: &DeployTarget,
    adapter: Address,
) -> anyhow::Result<()> {
    let deployments = target.stack.load_deployments()?;
    let batch_transaction = deployments.address_of(
        target.environment,
        target.network.chain_id,
        BATCH_TRANSACTION,
    )?;

    let spinner = Spinner::new(MSG_WHITELISTING_ADAPTER_SPINNER);
    let contract = BatchTransactionAbi::new(batch_transaction, target.client.clone());
    contract
        .set_adapters(vec![adapter], vec![true])
        .send()
        .await?
        .confirmations(1)
        .await?;
    spinner.finish();
    logger::success(MSG_ADAPTER_WHITELISTED);
    Ok(())
}

#[cfg(test)]
mod tests {
    use batchtx_cli_types::Environment;
    use batchtx_cli_config::Registry;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_kind_maps_to_a_distinct_contract() {
        let mut names: Vec<_> = AdapterKind::iter().map(|k| k.contract_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), AdapterKind::iter().count());
    }

    #[test]
    fn mainnet_ethereum_supports_the_eth_staking_adapters() {
        let registry = Registry::for_environment(Environment::Mainnet);
        let constants = registry.constants(ChainId::new(1)).unwrap();
        assert!(AdapterKind::AaveV3Supply.is_available(constants));
        assert!(AdapterKind::LidoStakeEth.is_available(constants));
        assert!(!AdapterKind::BenqiStakeAvax.is_available(constants));
    }

    #[test]
    fn constructor_args_start_with_native_and_wrapped_native() {
        let registry = Registry::for_environment(Environment::Mainnet);
        let chain_id = ChainId::new(1);
        let constants = registry.constants(chain_id).unwrap();

        let args = AdapterKind::AaveV3Supply
            .constructor_args(constants, chain_id)
            .unwrap();
        assert_eq!(args.len(), 4);
        assert_eq!(args[0], Token::Address(native_token()));
        assert_eq!(args[1], Token::Address(constants.wrapped_native));

        let err = AdapterKind::VenusSupply
            .constructor_args(constants, chain_id)
            .unwrap_err();
        assert!(err.to_string().contains("venus_vbnb"));
    }
}
