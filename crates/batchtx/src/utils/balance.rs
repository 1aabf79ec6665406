use batchtx_cli_common::{ethereum::get_the_balance, PromptSelect};
use batchtx_cli_config::MINIMUM_BALANCE_FOR_WALLET;
use ethers::types::{Address, U256};
use url::Url;

use crate::messages::{msg_address_doesnt_have_enough_money_prompt, MSG_DEPLOY_ABORTED};

/// Refuse to broadcast from an underfunded deployer without asking first.
pub async fn check_the_balance(rpc_url: &Url, address: Address) -> anyhow::Result<()> {
    const MSG_CONTINUE: &str = "Proceed with the deployment anyway";
    const MSG_CHECK_BALANCE: &str = "Check the balance again";
    const MSG_EXIT: &str = "Exit";

    let expected_balance = U256::from(MINIMUM_BALANCE_FOR_WALLET);
    loop {
        let balance = get_the_balance(rpc_url.as_str(), address).await?;
        if balance >= expected_balance {
            return Ok(());
        }

        let prompt_msg =
            msg_address_doesnt_have_enough_money_prompt(&address, balance, expected_balance);
        match PromptSelect::new(&prompt_msg, [MSG_CONTINUE, MSG_CHECK_BALANCE, MSG_EXIT]).ask() {
            MSG_CONTINUE => return Ok(()),
            MSG_CHECK_BALANCE => continue,
            MSG_EXIT => anyhow::bail!(MSG_DEPLOY_ABORTED),
            _ => unreachable!(),
        }
    }
}
