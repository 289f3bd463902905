//! HTTP surface: rmcp's streamable HTTP service mounted at `/mcp`, plus `/health`.

use crate::cli::ServeArgs;
use anyhow::Context as _;
use axum::{Json, Router, routing::get};
use rmcp::ServerHandler;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const MCP_PATH: &str = "/mcp";
pub const HEALTH_PATH: &str = "/health";

/// Build the router for one MCP server.
///
/// `factory` is called once per MCP session. Sessions are torn down when `shutdown` is cancelled.
pub fn router<S, F>(server_name: &'static str, factory: F, shutdown: &CancellationToken) -> Router
where
    S: ServerHandler,
    F: Fn() -> Result<S, std::io::Error> + Send + Sync + 'static,
{
    let mcp = StreamableHttpService::new(
        factory,
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            stateful_mode: true,
            cancellation_token: shutdown.child_token(),
            ..Default::default()
        },
    );

    Router::new()
        .route(
            HEALTH_PATH,
            get(move || async move { Json(json!({ "status": "ok", "server": server_name })) }),
        )
        .nest_service(MCP_PATH, mcp)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Browser-hosted clients call the server cross-origin; credentials are never needed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind, serve until SIGINT/SIGTERM, then drain.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve<S, F>(server_name: &'static str, args: &ServeArgs, factory: F) -> anyhow::Result<()>
where
    S: ServerHandler,
    F: Fn() -> Result<S, std::io::Error> + Send + Sync + 'static,
{
    let shutdown = CancellationToken::new();
    let app = router(server_name, factory, &shutdown);

    let addr = args.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local_addr = listener.local_addr().context("read listener address")?;

    tracing::info!(
        server = server_name,
        addr = %local_addr,
        mcp = MCP_PATH,
        "listening"
    );

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            wait_for_shutdown_signal().await;
            tracing::info!(server = server_name, "shutdown requested");
            shutdown.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("serve http")?;

    tracing::info!(server = server_name, "stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
