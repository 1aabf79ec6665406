use batchtx_cli_common::logger;
use batchtx_cli_config::{Registry, StackConfig};
use clap::Subcommand;
use xshell::Shell;

use crate::messages::msg_registry_for;

#[derive(Subcommand, Debug)]
pub enum RegistryCommands {
    /// Print the constants a deploy on the selected network would consume
    Show,
}

pub async fn run(command: RegistryCommands, shell: &Shell) -> anyhow::Result<()> {
    match command {
        RegistryCommands::Show => show(shell),
    }
}

fn show(shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;
    let environment = stack.environment()?;
    let network = stack.load_current_network()?;
    let constants = Registry::for_environment(environment).constants(network.chain_id)?;

    logger::step(msg_registry_for(&network.name, network.chain_id.as_u64()));
    logger::info(logger::object_to_string(constants));
    Ok(())
}
