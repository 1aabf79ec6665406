/// Name of the stack configuration file, looked up from the current
/// directory upwards.
pub const CONFIG_NAME: &str = "BatchTx.toml";
/// Name of the network set file inside the config directory.
pub const NETWORKS_FILE: &str = "networks.toml";
/// Name of the deployment record file.
pub const DEPLOYMENTS_FILE: &str = "deployments.json";
/// Directory (relative to the stack root) holding the deployment record.
pub const DEPLOYMENT_PATH: &str = "deployment";
/// Forge output directory inside the contracts checkout.
pub const FORGE_OUT_PATH: &str = "out";

/// Minimum deployer balance before broadcasting: 0.05 native units.
pub const MINIMUM_BALANCE_FOR_WALLET: u128 = 50_000_000_000_000_000;

/// Environment variables the CLI consumes.
pub const ENV_VAR_ENVIRONMENT: &str = "ENV";
pub const ENV_VAR_PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const ENV_VAR_OWNER: &str = "OWNER";
pub const ENV_VAR_DEFAULT_REFUND_ADDRESS: &str = "DEFAULT_REFUND_ADDRESS";
