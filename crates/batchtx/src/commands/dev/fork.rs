use std::time::Duration;

use batchtx_cli_common::{anvil::start_anvil_fork, logger};
use batchtx_cli_config::StackConfig;
use clap::Parser;
use xshell::Shell;

use crate::messages::{msg_fork_ready, MSG_FORK_STOPPED, MSG_FORK_STOP_HINT};

#[derive(Debug, Parser)]
pub struct ForkArgs {
    /// Expose the fork under a different chain id than the upstream chain
    #[clap(long)]
    pub chain_id: Option<u64>,
}

/// Fork the selected network locally and keep it alive until Ctrl-C, so
/// integration tests can run against forked mainnet state.
pub async fn run(args: ForkArgs, shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;
    let network = stack.load_current_network()?;
    let rpc_url = network.resolve_rpc_url()?;

    let chain_id = args.chain_id.unwrap_or(network.chain_id.as_u64());
    let anvil = start_anvil_fork(rpc_url.as_str(), Some(chain_id))?;
    anvil.wait_until_ready(Duration::from_secs(30)).await?;

    logger::success(msg_fork_ready(anvil.rpc_url()));
    logger::info(MSG_FORK_STOP_HINT);
    tokio::signal::ctrl_c().await?;

    drop(anvil);
    logger::outro(MSG_FORK_STOPPED);
    Ok(())
}
