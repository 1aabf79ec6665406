use batchtx_cli_common::{
    contracts::{ContractSpec, Verifier},
    logger,
    spinner::Spinner,
};
use batchtx_cli_config::{NetworkConfig, StackConfig};
use ethers::types::{Address, Bytes};
use url::Url;
use xshell::Shell;

use crate::messages::{msg_contract_verified, msg_no_verifier_configured, msg_verifying_contract};

/// Assemble the explorer verifier for a network, failing early when the
/// network has no verifier configured.
pub fn build_verifier(
    stack: &StackConfig,
    network: &NetworkConfig,
    rpc_url: &Url,
) -> anyhow::Result<Verifier> {
    let config = network
        .verifier
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!(msg_no_verifier_configured(&network.name)))?;
    Ok(Verifier {
        contracts_path: stack.link_to_contracts(),
        rpc_url: rpc_url.clone(),
        kind: config.kind,
        verifier_url: config.url.clone(),
        api_key: config.api_key(),
    })
}

pub fn verify_one(
    shell: &Shell,
    verifier: &Verifier,
    contract_name: &str,
    address: Address,
    constructor_args: Bytes,
) -> anyhow::Result<()> {
    let spinner = Spinner::new(&msg_verifying_contract(contract_name));
    let result = verifier.verify_contract(
        shell,
        &ContractSpec {
            name: contract_name.to_string(),
            address,
            constructor_args,
        },
    );
    match result {
        Ok(()) => {
            spinner.finish();
            logger::success(msg_contract_verified(contract_name));
            Ok(())
        }
        Err(err) => {
            spinner.fail();
            Err(err)
        }
    }
}
