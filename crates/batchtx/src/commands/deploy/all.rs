use batchtx_cli_common::logger;
use strum::IntoEnumIterator;
use xshell::Shell;

use super::{
    adapter::{self, AdapterKind},
    args::DeployArgs,
    batch_transaction, common, dexspan_adapter, nitro_adapter,
};
use crate::messages::{msg_deployed_all, msg_skipping_adapter};

/// Deploy the full stack on one chain: router first, then the core
/// adapters, then every protocol adapter the chain supports. Ownership is
/// handed over last so whitelisting stays possible in between.
pub async fn run(args: DeployArgs, shell: &Shell) -> anyhow::Result<()> {
    let target = common::prepare(shell).await?;
    let mut deployed = 0usize;

    let batch_transaction_addr = batch_transaction::deploy(shell, &target, &args).await?;
    deployed += 1;

    dexspan_adapter::deploy(shell, &target, &args).await?;
    deployed += 1;
    nitro_adapter::deploy(shell, &target, &args).await?;
    deployed += 1;

    for kind in AdapterKind::iter() {
        if !kind.is_available(target.constants) {
            logger::warn(msg_skipping_adapter(
                kind.contract_name(),
                &target.network.name,
            ));
            continue;
        }
        adapter::deploy(shell, &target, kind, &args).await?;
        deployed += 1;
    }

    batch_transaction::transfer_ownership_if_needed(&target, batch_transaction_addr).await?;

    logger::outro(msg_deployed_all(deployed, &target.network.name));
    Ok(())
}
