use batchtx_cli_common::{logger, spinner::Spinner, Prompt};
use batchtx_cli_config::native_token;
use ethers::{abi::Token, types::Address};
use xshell::Shell;

use super::{
    args::DeployArgs,
    common::{deploy_and_record, prepare, DeployTarget},
};
use crate::{
    abi::BatchTransactionAbi,
    consts::BATCH_TRANSACTION,
    messages::{
        msg_contract_deployed, msg_ownership_transferred, MSG_REFUND_ADDRESS_INVALID_ERR,
        MSG_REFUND_ADDRESS_PROMPT, MSG_TRANSFERRING_OWNERSHIP_SPINNER,
    },
};

pub async fn run(args: DeployArgs, shell: &Shell) -> anyhow::Result<()> {
    let target = prepare(shell).await?;
    let address = deploy(shell, &target, &args).await?;
    transfer_ownership_if_needed(&target, address).await?;
    logger::outro(msg_contract_deployed(BATCH_TRANSACTION, address));
    Ok(())
}

/// Deploy the router. Constructor args come from the constants registry,
/// the refund address from the operator's environment.
pub(crate) async fn deploy(
    shell: &Shell,
    target: &DeployTarget,
    args: &DeployArgs,
) -> anyhow::Result<Address> {
    let refund_address = match target.secrets.default_refund_address {
        Some(address) => address,
        None => Prompt::new(MSG_REFUND_ADDRESS_PROMPT)
            .validate_with(|val: &String| {
                val.parse::<Address>()
                    .map(|_| ())
                    .map_err(|_| MSG_REFUND_ADDRESS_INVALID_ERR.to_string())
            })
            .ask(),
    };
    let constants = target.constants;
    let constructor_args = vec![
        Token::Address(native_token()),
        Token::Address(constants.wrapped_native),
        Token::Address(constants.asset_forwarder),
        Token::Address(constants.dexspan),
        Token::Address(refund_address),
    ];
    deploy_and_record(shell, target, BATCH_TRANSACTION, constructor_args, args.verify).await
}

/// Hand the router to the configured owner when it differs from the
/// deployer. Must run after adapter whitelisting, which only the current
/// owner can do.
pub(crate) async fn transfer_ownership_if_needed(
    target: &DeployTarget,
    batch_transaction: Address,
) -> anyhow::Result<()> {
    let owner = target.secrets.owner_or_deployer();
    if owner == target.secrets.wallet.address {
        return Ok(());
    }

    let spinner = Spinner::new(MSG_TRANSFERRING_OWNERSHIP_SPINNER);
    let contract = BatchTransactionAbi::new(batch_transaction, target.client.clone());
    contract
        .transfer_ownership(owner)
        .send()
        .await?
        .confirmations(1)
        .await?;
    spinner.finish();
    logger::success(msg_ownership_transferred(owner));
    Ok(())
}
