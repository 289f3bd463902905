use anyhow::Context as _;
use futures::StreamExt as _;
use serde_json::{Value, json};
use std::time::Duration;
use tokio::io::AsyncBufReadExt as _;
use tokio_util::io::StreamReader;

/// Minimal MCP client for a server's streamable HTTP endpoint (`/mcp`).
///
/// Test-only: it speaks just enough JSON-RPC to initialize a session and issue requests.
pub struct McpSession {
    client: reqwest::Client,
    endpoint: String,
    session_id: String,
}

impl McpSession {
    /// Run `initialize` + `notifications/initialized` against `<base_url>/mcp`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handshake fails or the server omits the session header.
    pub async fn connect(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let endpoint = format!("{}/mcp", base_url.trim_end_matches('/'));

        let init_resp = post_mcp(
            &client,
            &endpoint,
            None,
            json!({
                "jsonrpc": "2.0",
                "id": 0,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "skybridge-integration-tests", "version": "0" }
                }
            }),
        )
        .await?;

        let session_id = init_resp
            .headers()
            .get("Mcp-Session-Id")
            .and_then(|h| h.to_str().ok())
            .context("missing Mcp-Session-Id header")?
            .to_string();

        let init_msg = read_json_message(init_resp).await?;
        anyhow::ensure!(init_msg.get("id") == Some(&json!(0)), "unexpected init id");

        let initialized_resp = post_mcp(
            &client,
            &endpoint,
            Some(&session_id),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        )
        .await?;
        anyhow::ensure!(
            initialized_resp.status().as_u16() == 202,
            "POST /mcp notifications/initialized returned {}",
            initialized_resp.status()
        );

        Ok(Self {
            client,
            endpoint,
            session_id,
        })
    }

    /// Send a request and return the full JSON-RPC response message.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or if no response arrives within `timeout_dur`.
    pub async fn request(
        &self,
        id: u64,
        method: &str,
        params: Value,
        timeout_dur: Duration,
    ) -> anyhow::Result<Value> {
        let resp = post_mcp(
            &self.client,
            &self.endpoint,
            Some(&self.session_id),
            json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": method,
                "params": params,
            }),
        )
        .await?;

        tokio::time::timeout(timeout_dur, read_json_message(resp))
            .await
            .context("timeout waiting for response")?
    }

    /// `tools/call` shortcut; returns the `result` object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries a JSON-RPC error.
    pub async fn call_tool(&self, id: u64, name: &str, arguments: Value) -> anyhow::Result<Value> {
        let msg = self
            .request(
                id,
                "tools/call",
                json!({ "name": name, "arguments": arguments }),
                Duration::from_secs(10),
            )
            .await?;
        tool_result(&msg).cloned()
    }
}

/// Extract `result` from a JSON-RPC response, failing on `error`.
///
/// # Errors
///
/// Returns an error if the message carries an `error` member or has no `result`.
pub fn tool_result(msg: &Value) -> anyhow::Result<&Value> {
    if let Some(error) = msg.get("error") {
        anyhow::bail!("JSON-RPC error: {error}");
    }
    msg.get("result").context("response missing result")
}

async fn post_mcp(
    client: &reqwest::Client,
    endpoint: &str,
    session_id: Option<&str>,
    body: Value,
) -> anyhow::Result<reqwest::Response> {
    let mut req = client
        .post(endpoint)
        .header("Accept", "application/json, text/event-stream")
        .header("Content-Type", "application/json")
        .json(&body);

    if let Some(session_id) = session_id {
        req = req.header("Mcp-Session-Id", session_id);
    }

    req.send()
        .await
        .context("POST /mcp")?
        .error_for_status()
        .context("POST /mcp status")
}

/// Read one JSON-RPC message from either a JSON body or an event stream.
async fn read_json_message(resp: reqwest::Response) -> anyhow::Result<Value> {
    let is_json = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));
    if is_json {
        return resp.json().await.context("parse JSON response");
    }

    let byte_stream = Box::pin(
        resp.bytes_stream()
            .map(|r| r.map_err(std::io::Error::other)),
    );
    let reader = StreamReader::new(byte_stream);
    let mut lines = tokio::io::BufReader::new(reader).lines();

    let mut data_lines: Vec<String> = Vec::new();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim_end();

        if line.is_empty() {
            let data = data_lines.join("\n");
            data_lines.clear();
            // Priming events carry an id but no payload.
            if data.trim().is_empty() {
                continue;
            }
            return serde_json::from_str(&data).context("parse event-stream data as JSON");
        }

        if let Some(v) = line.strip_prefix("data:") {
            data_lines.push(v.trim().to_string());
        }
    }

    anyhow::bail!("event-stream ended without a JSON message")
}
