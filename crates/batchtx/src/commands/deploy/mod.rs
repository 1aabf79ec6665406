use clap::Subcommand;
use xshell::Shell;

pub mod adapter;
pub mod all;
pub mod args;
pub mod batch_transaction;
pub(crate) mod common;
pub mod dexspan_adapter;
pub mod nitro_adapter;

use self::{adapter::AdapterArgs, args::DeployArgs};

#[derive(Subcommand, Debug)]
pub enum DeployCommands {
    /// Deploy the BatchTransaction router
    BatchTransaction(DeployArgs),
    /// Deploy the DexSpan swap adapter
    DexspanAdapter(DeployArgs),
    /// Deploy the Nitro cross-chain adapter
    NitroAdapter(DeployArgs),
    /// Deploy one protocol adapter
    Adapter(AdapterArgs),
    /// Deploy the router and every adapter available on the network
    All(DeployArgs),
}

pub async fn run(command: DeployCommands, shell: &Shell) -> anyhow::Result<()> {
    match command {
        DeployCommands::BatchTransaction(args) => batch_transaction::run(args, shell).await,
        DeployCommands::DexspanAdapter(args) => dexspan_adapter::run(args, shell).await,
        DeployCommands::NitroAdapter(args) => nitro_adapter::run(args, shell).await,
        DeployCommands::Adapter(args) => adapter::run(args, shell).await,
        DeployCommands::All(args) => all::run(args, shell).await,
    }
}
