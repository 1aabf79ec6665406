use clap::Subcommand;
use xshell::Shell;

mod build;
mod fork;

pub use fork::ForkArgs;

#[derive(Subcommand, Debug)]
pub enum DevCommands {
    /// Start an anvil fork of the selected network
    Fork(ForkArgs),
    /// Build the protocol's Solidity checkout
    Build,
}

pub async fn run(command: DevCommands, shell: &Shell) -> anyhow::Result<()> {
    match command {
        DevCommands::Fork(args) => fork::run(args, shell).await,
        DevCommands::Build => build::run(shell).await,
    }
}
