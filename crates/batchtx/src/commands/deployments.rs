use batchtx_cli_common::logger;
use batchtx_cli_config::StackConfig;
use clap::{Parser, Subcommand};
use xshell::Shell;

use crate::messages::{
    msg_deployments_on, msg_no_deployments_in_environment, msg_no_deployments_on_network,
};

#[derive(Subcommand, Debug)]
pub enum DeploymentsCommands {
    /// Print every recorded deployment for the current environment
    List,
    /// Print one recorded deployment on the selected network
    Show(ShowArgs),
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Contract name as recorded in deployments.json
    pub contract: String,
}

pub async fn run(command: DeploymentsCommands, shell: &Shell) -> anyhow::Result<()> {
    match command {
        DeploymentsCommands::List => list(shell),
        DeploymentsCommands::Show(args) => show(args, shell),
    }
}

fn list(shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;
    let environment = stack.environment()?;
    let networks = stack.load_networks()?;
    let deployments = stack.load_deployments()?;

    let chains = deployments.chains(environment);
    if chains.is_empty() {
        logger::info(msg_no_deployments_in_environment(&environment.to_string()));
        return Ok(());
    }

    for chain_id in chains {
        // Chains may be recorded under networks no longer configured.
        let name = networks
            .by_chain_id(chain_id)
            .map(|network| network.name.clone())
            .unwrap_or_else(|_| "unknown".to_string());
        logger::step(msg_deployments_on(&name, chain_id.as_u64()));
        if let Some(contracts) = deployments.contracts_on(environment, chain_id) {
            logger::info(logger::object_to_string(contracts));
        }
    }
    Ok(())
}

fn show(args: ShowArgs, shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;
    let environment = stack.environment()?;
    let network = stack.load_current_network()?;
    let deployments = stack.load_deployments()?;

    if deployments
        .contracts_on(environment, network.chain_id)
        .is_none()
    {
        anyhow::bail!(msg_no_deployments_on_network(&network.name));
    }

    let record = deployments.get(environment, network.chain_id, &args.contract)?;
    logger::info(logger::object_to_string(record));
    Ok(())
}
