use batchtx_cli_common::{
    config::{init_global_config, GlobalConfig},
    error::log_error,
    init_prompt_theme, logger,
};
use clap::{command, Parser, Subcommand};
use xshell::Shell;

use crate::commands::{
    autocomplete::AutocompleteArgs, deploy::DeployCommands, deployments::DeploymentsCommands,
    dev::DevCommands, registry::RegistryCommands, verify::VerifyArgs,
};

mod abi;
mod commands;
mod consts;
mod messages;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "batchtx", about)]
pub(crate) struct Batchtx {
    #[command(subcommand)]
    command: BatchtxSubcommands,
    #[clap(flatten)]
    global: BatchtxGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum BatchtxSubcommands {
    /// Deploy protocol contracts on the selected network
    #[command(subcommand)]
    Deploy(Box<DeployCommands>),
    /// Re-run explorer verification for recorded deployments
    Verify(VerifyArgs),
    /// Inspect the deployment record
    #[command(subcommand, alias = "deps")]
    Deployments(DeploymentsCommands),
    /// Inspect the constants registry
    #[command(subcommand)]
    Registry(RegistryCommands),
    /// Dev helpers: chain forks and contract builds
    #[command(subcommand)]
    Dev(DevCommands),
    /// Generate shell completions
    Autocomplete(AutocompleteArgs),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct BatchtxGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
    /// Target network, by its name in networks.toml
    #[clap(short, long, global = true)]
    network: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();
    let cli_args = Batchtx::parse();
    match run_subcommand(cli_args).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(cli_args: Batchtx) -> anyhow::Result<()> {
    init_prompt_theme();

    logger::new_empty_line();
    logger::intro();

    init_global_config(GlobalConfig {
        verbose: cli_args.global.verbose,
        network_name: cli_args.global.network.clone(),
    });
    let shell = Shell::new()?;

    match cli_args.command {
        BatchtxSubcommands::Deploy(args) => commands::deploy::run(*args, &shell).await?,
        BatchtxSubcommands::Verify(args) => commands::verify::run(args, &shell).await?,
        BatchtxSubcommands::Deployments(args) => commands::deployments::run(args, &shell).await?,
        BatchtxSubcommands::Registry(args) => commands::registry::run(args, &shell).await?,
        BatchtxSubcommands::Dev(args) => commands::dev::run(args, &shell).await?,
        BatchtxSubcommands::Autocomplete(args) => commands::autocomplete::run(args)?,
    }
    Ok(())
}
