use ethers::{
    types::{Address, U256},
    utils::format_ether,
};

/// Common messages
pub(super) const MSG_DEPLOY_ABORTED: &str = "Deployment aborted";

pub(super) fn msg_confirm_mainnet_deploy(network: &str) -> String {
    format!("You are about to deploy to {network} with real funds. Continue?")
}

pub(super) const MSG_REFUND_ADDRESS_PROMPT: &str =
    "DEFAULT_REFUND_ADDRESS is not set. Which address should receive refunds?";
pub(super) const MSG_REFUND_ADDRESS_INVALID_ERR: &str = "Invalid address";

/// Deploy related messages
pub(super) fn msg_deploying_contract(contract: &str, network: &str) -> String {
    format!("Deploying {contract} on {network}...")
}

pub(super) fn msg_contract_deployed(contract: &str, address: Address) -> String {
    format!("{contract} deployed at {address:#x}")
}

pub(super) fn msg_deployed_all(count: usize, network: &str) -> String {
    format!("Deployed {count} contracts on {network}")
}

pub(super) fn msg_skipping_adapter(adapter: &str, network: &str) -> String {
    format!("Skipping {adapter}: protocol is not configured for {network}")
}

pub(super) const MSG_TRANSFERRING_OWNERSHIP_SPINNER: &str = "Transferring ownership...";

pub(super) fn msg_ownership_transferred(owner: Address) -> String {
    format!("Ownership transferred to {owner:#x}")
}

pub(super) const MSG_WHITELISTING_ADAPTER_SPINNER: &str =
    "Whitelisting the adapter on BatchTransaction...";
pub(super) const MSG_ADAPTER_WHITELISTED: &str = "Adapter whitelisted";

pub(super) fn msg_address_doesnt_have_enough_money_prompt(
    address: &Address,
    balance: U256,
    expected: U256,
) -> String {
    format!(
        "Address {address:#x} has {} ETH but at least {} ETH is expected. Top it up or choose how to proceed",
        format_ether(balance),
        format_ether(expected),
    )
}

/// Verification related messages
pub(super) fn msg_verifying_contract(contract: &str) -> String {
    format!("Verifying {contract} on the explorer...")
}

pub(super) fn msg_contract_verified(contract: &str) -> String {
    format!("{contract} verified")
}

pub(super) fn msg_verified_contracts(count: usize, network: &str) -> String {
    format!("Verified {count} contracts on {network}")
}

pub(super) fn msg_no_verifier_configured(network: &str) -> String {
    format!("No verifier configured for network {network} in networks.toml")
}

/// Deployment record related messages
pub(super) fn msg_deployments_on(network: &str, chain_id: u64) -> String {
    format!("Deployments on {network} (chain {chain_id})")
}

pub(super) fn msg_no_deployments_on_network(network: &str) -> String {
    format!("No deployments recorded on {network} yet")
}

pub(super) fn msg_no_deployments_in_environment(environment: &str) -> String {
    format!("No deployments recorded for {environment} yet")
}

/// Registry related messages
pub(super) fn msg_registry_for(network: &str, chain_id: u64) -> String {
    format!("Constants for {network} (chain {chain_id})")
}

/// Dev related messages
pub(super) const MSG_BUILDING_CONTRACTS_SPINNER: &str = "Building protocol contracts...";
pub(super) const MSG_CONTRACTS_BUILT: &str = "Protocol contracts built";

pub(super) fn msg_fork_ready(rpc_url: &str) -> String {
    format!("Fork ready at {rpc_url}")
}

pub(super) const MSG_FORK_STOP_HINT: &str = "Press Ctrl-C to stop the fork";
pub(super) const MSG_FORK_STOPPED: &str = "Fork stopped";

/// Autocomplete messages
pub(super) fn msg_generate_autocomplete_file(filename: &str) -> String {
    format!("Generating completion file: {filename}")
}

pub(super) const MSG_OUTRO_AUTOCOMPLETE_GENERATION: &str =
    "Autocompletion file correctly generated";
