use std::{
    process::{Child, Command, Stdio},
    time::Duration,
};

use anyhow::Context;

use crate::{ethereum::wait_for_rpc, logger};

/// A running anvil instance forking a live chain. Killed on drop.
pub struct AnvilInstance {
    child: Child,
    rpc_url: String,
    port: u16,
}

impl AnvilInstance {
    /// The local RPC URL for this anvil instance.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Wait until the fork answers `eth_chainId`.
    pub async fn wait_until_ready(&self, timeout: Duration) -> anyhow::Result<()> {
        wait_for_rpc(&self.rpc_url, timeout).await
    }
}

impl Drop for AnvilInstance {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            eprintln!("warning: failed to kill anvil (pid {}): {e}", self.child.id());
        }
        // Reap the child to avoid zombie processes.
        let _ = self.child.wait();
    }
}

/// Start anvil forking the given RPC URL with auto-impersonate enabled.
///
/// The caller is expected to `wait_until_ready` before issuing requests.
pub fn start_anvil_fork(fork_url: &str, chain_id: Option<u64>) -> anyhow::Result<AnvilInstance> {
    let port = pick_unused_port()?;

    logger::info(format!(
        "Starting anvil fork of {fork_url} on port {port}..."
    ));

    let mut args: Vec<String> = vec![
        "--fork-url".to_string(),
        fork_url.to_string(),
        "--port".to_string(),
        port.to_string(),
        "--auto-impersonate".to_string(),
    ];
    if let Some(chain_id) = chain_id {
        args.push("--chain-id".to_string());
        args.push(chain_id.to_string());
    }

    let child = Command::new("anvil")
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn anvil — is it installed?")?;

    Ok(AnvilInstance {
        child,
        rpc_url: format!("http://127.0.0.1:{port}"),
        port,
    })
}

/// Find an unused TCP port by binding to :0 and reading back the assigned port.
fn pick_unused_port() -> anyhow::Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .context("failed to bind ephemeral port for anvil")?;
    let port = listener.local_addr()?.port();
    // Listener is dropped here, freeing the port for anvil.
    // There is a small TOCTOU window, but acceptable for dev/test tooling.
    Ok(port)
}
