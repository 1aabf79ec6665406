use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
pub struct DeployArgs {
    /// Verify the contract on the network's explorer after deployment
    #[clap(long)]
    pub verify: bool,
}
