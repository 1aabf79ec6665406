use batchtx_cli_common::logger;
use batchtx_cli_config::native_token;
use ethers::{abi::Token, types::Address};
use xshell::Shell;

use super::{
    args::DeployArgs,
    common::{deploy_and_record, prepare, DeployTarget},
};
use crate::{
    commands::deploy::adapter::whitelist_on_batch_transaction, consts::NITRO_ADAPTER,
    messages::msg_contract_deployed,
};

pub async fn run(args: DeployArgs, shell: &Shell) -> anyhow::Result<()> {
    let target = prepare(shell).await?;
    let address = deploy(shell, &target, &args).await?;
    logger::outro(msg_contract_deployed(NITRO_ADAPTER, address));
    Ok(())
}

pub(crate) async fn deploy(
    shell: &Shell,
    target: &DeployTarget,
    args: &DeployArgs,
) -> anyhow::Result<Address> {
    let constants = target.constants;
    let constructor_args = vec![
        Token::Address(native_token()),
        Token::Address(constants.wrapped_native),
        Token::Address(constants.asset_forwarder),
        Token::Address(constants.dexspan),
    ];
    let address =
        deploy_and_record(shell, target, NITRO_ADAPTER, constructor_args, args.verify).await?;
    whitelist_on_batch_transaction(target, address).await?;
    Ok(address)
}
