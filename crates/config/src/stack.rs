use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use batchtx_cli_common::{config::global_config, files::find_file};
use batchtx_cli_types::Environment;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use xshell::Shell;

use crate::{
    consts::{CONFIG_NAME, DEPLOYMENT_PATH},
    environment_from_env,
    networks::{NetworkConfig, NetworksConfig},
    registry::Registry,
    traits::{FileConfigTrait, FileConfigWithDefaultName, ReadConfig, SaveConfigWithBasePath},
    DeploymentsConfig,
};

/// Stack configuration file, created once at the repository root.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StackConfigInternal {
    pub name: String,
    pub environment: Environment,
    pub link_to_contracts: PathBuf,
    pub config: PathBuf,
    pub default_network: String,
}

/// Stack configuration file, created once at the repository root.
/// Discovered by walking up from the current directory.
#[derive(Debug, Clone)]
pub struct StackConfig {
    pub name: String,
    pub config: PathBuf,
    environment: Environment,
    link_to_contracts: PathBuf,
    default_network: String,
    shell: OnceCell<Shell>,
}

impl Serialize for StackConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get_internal().serialize(serializer)
    }
}

impl ReadConfig for StackConfig {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = StackConfigInternal::read(shell, path)?;
        Ok(StackConfig {
            name: config.name,
            environment: config.environment,
            link_to_contracts: shell.current_dir().join(config.link_to_contracts),
            config: config.config,
            default_network: config.default_network,
            shell: Default::default(),
        })
    }
}

impl FileConfigWithDefaultName for StackConfig {
    const FILE_NAME: &'static str = CONFIG_NAME;
}

impl FileConfigTrait for StackConfigInternal {}

impl FileConfigTrait for StackConfig {}

impl StackConfig {
    fn get_shell(&self) -> &Shell {
        self.shell.get().expect("Must be initialized")
    }

    /// Locate and read the stack config, changing the shell's directory to
    /// the stack root so every relative path below resolves from there.
    pub fn from_file(shell: &Shell) -> Result<Self, StackConfigFromFileError> {
        let Ok(root) = find_file(shell, &shell.current_dir(), CONFIG_NAME) else {
            return Err(StackConfigFromFileError::NotExists {
                path: shell.current_dir(),
            });
        };
        shell.change_dir(&root);

        let mut config = StackConfig::read(shell, CONFIG_NAME)
            .map_err(|err| StackConfigFromFileError::InvalidConfig { source: err })?;
        config.shell = shell.clone().into();
        Ok(config)
    }

    /// The active environment: the `ENV` variable overrides the file value.
    pub fn environment(&self) -> anyhow::Result<Environment> {
        Ok(environment_from_env()?.unwrap_or(self.environment))
    }

    pub fn link_to_contracts(&self) -> PathBuf {
        self.link_to_contracts.clone()
    }

    pub fn default_network(&self) -> &str {
        &self.default_network
    }

    /// The network the invocation targets: global `--network` flag, else the
    /// configured default.
    pub fn current_network(&self) -> &str {
        global_config()
            .network_name
            .as_deref()
            .unwrap_or(self.default_network.as_ref())
    }

    pub fn load_networks(&self) -> anyhow::Result<NetworksConfig> {
        NetworksConfig::read(
            self.get_shell(),
            self.config.join(NetworksConfig::FILE_NAME),
        )
    }

    pub fn load_network(&self, name: Option<&str>) -> anyhow::Result<NetworkConfig> {
        let networks = self.load_networks()?;
        let name = name.unwrap_or_else(|| self.current_network());
        networks.by_name(name).cloned()
    }

    pub fn load_current_network(&self) -> anyhow::Result<NetworkConfig> {
        self.load_network(None)
    }

    pub fn deployments_path(&self) -> PathBuf {
        PathBuf::from(DEPLOYMENT_PATH)
    }

    pub fn load_deployments(&self) -> anyhow::Result<DeploymentsConfig> {
        DeploymentsConfig::read_or_default(
            self.get_shell(),
            DeploymentsConfig::get_path_with_base_path(self.deployments_path()),
        )
    }

    pub fn save_deployments(&self, deployments: &DeploymentsConfig) -> anyhow::Result<()> {
        let shell = self.get_shell();
        shell.create_dir(self.deployments_path())?;
        deployments.save_with_base_path(shell, self.deployments_path())
    }

    /// The constants registry for the active environment.
    pub fn registry(&self) -> anyhow::Result<&'static Registry> {
        Ok(Registry::for_environment(self.environment()?))
    }

    fn get_internal(&self) -> StackConfigInternal {
        StackConfigInternal {
            name: self.name.clone(),
            environment: self.environment,
            link_to_contracts: self.link_to_contracts.clone(),
            config: self.config.clone(),
            default_network: self.default_network.clone(),
        }
    }
}

/// Result of checking if the stack config exists.
#[derive(Error, Debug)]
pub enum StackConfigFromFileError {
    #[error("Stack configuration not found (Could not find '{CONFIG_NAME}' in {path:?}: Make sure you are inside a batchtx repository)")]
    NotExists { path: PathBuf },
    #[error("Invalid stack configuration")]
    InvalidConfig { source: anyhow::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_file_walks_up_and_changes_dir() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        shell.change_dir(&root);
        shell
            .write_file(
                root.join(CONFIG_NAME),
                r#"
name = "batchtx"
environment = "testnet"
link_to_contracts = "contracts"
config = "config"
default_network = "polygon-amoy"
"#,
            )
            .unwrap();
        let nested = root.join("deployment");
        shell.create_dir(&nested).unwrap();
        shell.change_dir(&nested);

        let config = StackConfig::from_file(&shell).unwrap();
        assert_eq!(config.name, "batchtx");
        assert_eq!(config.default_network(), "polygon-amoy");
        assert_eq!(shell.current_dir(), root);
        assert!(config.link_to_contracts().ends_with("contracts"));
    }

    #[test]
    fn missing_config_is_a_typed_error() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        shell.change_dir(dir.path());

        let err = StackConfig::from_file(&shell).unwrap_err();
        assert!(matches!(err, StackConfigFromFileError::NotExists { .. }));
    }
}
