use batchtx_cli_common::{contracts::build_protocol_contracts, logger, spinner::Spinner};
use batchtx_cli_config::StackConfig;
use xshell::Shell;

use crate::messages::{MSG_BUILDING_CONTRACTS_SPINNER, MSG_CONTRACTS_BUILT};

pub async fn run(shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;

    let spinner = Spinner::new(MSG_BUILDING_CONTRACTS_SPINNER);
    build_protocol_contracts(shell, &stack.link_to_contracts())?;
    spinner.finish();

    logger::outro(MSG_CONTRACTS_BUILT);
    Ok(())
}
