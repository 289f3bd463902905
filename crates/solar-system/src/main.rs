use anyhow::Context as _;
use clap::Parser;
use skybridge_runtime::{ServeArgs, init_tracing, serve};
use skybridge_solar_system::assets::load_widget_html;
use skybridge_solar_system::tool::WIDGET_COMPONENT;
use skybridge_solar_system::{SERVER_NAME, SolarSystemServer};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skybridge-solar-system", version, about = "Solar system widget MCP server")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,

    /// Directory holding the built widget (`solar-system.html` or `solar-system-<hash>.html`).
    #[arg(long, env = "SKYBRIDGE_ASSETS_DIR", default_value = "assets")]
    assets_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.serve.log_level, cli.serve.log_format)?;

    let html = load_widget_html(&cli.assets_dir, WIDGET_COMPONENT)
        .context("load solar system widget markup")?;
    tracing::info!(
        assets_dir = %cli.assets_dir.display(),
        bytes = html.len(),
        "loaded widget markup"
    );
    let server = SolarSystemServer::new(html).context("build widget catalog")?;

    serve(SERVER_NAME, &cli.serve, move || Ok(server.clone())).await
}
