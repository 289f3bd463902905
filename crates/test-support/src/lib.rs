//! Helpers for integration tests that spawn a server binary and talk MCP to it.

mod mcp;

pub use mcp::{McpSession, tool_result};

use anyhow::Context as _;
use std::ffi::OsStr;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Pick an unused TCP port on localhost.
///
/// Note: this does not reserve the port; it's still possible for another process to bind it
/// before you do.
///
/// # Errors
///
/// Returns an error if binding an ephemeral localhost port fails or if the bound socket's
/// local address cannot be read.
pub fn pick_unused_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind ephemeral port")?;
    Ok(listener.local_addr()?.port())
}

/// Poll an HTTP URL until it returns a success status (2xx).
///
/// # Errors
///
/// Returns an error if the timeout elapses before the endpoint returns a success status.
pub async fn wait_http_ok(url: &str, timeout_dur: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > timeout_dur {
            anyhow::bail!("timed out waiting for {url}");
        }

        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => tokio::time::sleep(Duration::from_millis(200)).await,
        }
    }
}

/// A spawned server binary listening on a private localhost port. Killed on drop.
pub struct ServerProcess {
    child: Child,
    base_url: String,
}

impl ServerProcess {
    /// Spawn `bin` with `--bind 127.0.0.1:<port>` plus `args`, and wait for `/health`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or never becomes healthy.
    pub async fn start<I, S>(bin: &str, args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let port = pick_unused_port()?;
        let child = Command::new(bin)
            .arg("--bind")
            .arg(format!("127.0.0.1:{port}"))
            .arg("--log-level")
            .arg("info")
            .args(args)
            .env_remove("PORT")
            .stdout(Stdio::null())
            .spawn()
            .with_context(|| format!("spawn {bin}"))?;

        let process = Self {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
        };
        wait_http_ok(
            &format!("{}/health", process.base_url),
            Duration::from_secs(20),
        )
        .await?;
        Ok(process)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Spawn `bin` and wait for it to exit on its own (e.g. a startup failure).
///
/// # Errors
///
/// Returns an error if the process does not exit within `timeout_dur`.
pub fn run_until_exit<I, S>(
    bin: &str,
    args: I,
    timeout_dur: Duration,
) -> anyhow::Result<std::process::ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let port = pick_unused_port()?;
    let mut child = Command::new(bin)
        .arg("--bind")
        .arg(format!("127.0.0.1:{port}"))
        .args(args)
        .env_remove("PORT")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("spawn {bin}"))?;

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if start.elapsed() > timeout_dur {
            let _ = child.kill();
            anyhow::bail!("{bin} did not exit within {timeout_dur:?}");
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}
