use anyhow::Context;
use batchtx_cli_config::StackConfig;
use clap::Parser;
use batchtx_cli_common::logger;
use xshell::Shell;

use crate::{
    messages::{msg_no_deployments_on_network, msg_verified_contracts},
    utils::verifier::{build_verifier, verify_one},
};

#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Contract name to verify; verifies every recorded contract on the
    /// network when omitted
    pub contract: Option<String>,
}

pub async fn run(args: VerifyArgs, shell: &Shell) -> anyhow::Result<()> {
    let stack = StackConfig::from_file(shell)?;
    let environment = stack.environment()?;
    let network = stack.load_current_network()?;
    let rpc_url = network.resolve_rpc_url()?;
    let deployments = stack.load_deployments()?;

    let names: Vec<String> = match args.contract {
        Some(name) => vec![name],
        None => deployments
            .contracts_on(environment, network.chain_id)
            .with_context(|| msg_no_deployments_on_network(&network.name))?
            .keys()
            .cloned()
            .collect(),
    };

    let verifier = build_verifier(&stack, &network, &rpc_url)?;
    for name in &names {
        let record = deployments.get(environment, network.chain_id, name)?;
        verify_one(
            shell,
            &verifier,
            name,
            record.address,
            record.constructor_args.clone(),
        )?;
    }

    logger::outro(msg_verified_contracts(names.len(), &network.name));
    Ok(())
}
