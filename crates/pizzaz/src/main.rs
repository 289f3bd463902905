use anyhow::Context as _;
use clap::Parser;
use skybridge_pizzaz::catalog::DEFAULT_KENDO_ASSET_BASE;
use skybridge_pizzaz::{CatalogKind, PizzazServer, SERVER_NAME};
use skybridge_runtime::{ServeArgs, init_tracing, serve};

#[derive(Debug, Parser)]
#[command(name = "skybridge-pizzaz", version, about = "Pizzaz widget gallery MCP server")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,

    /// Widget gallery to expose.
    #[arg(long, env = "PIZZAZ_CATALOG", value_enum, default_value_t = CatalogKind::Pizza)]
    catalog: CatalogKind,

    /// Base URL serving the Kendo component bundles (`<component>.js` / `<component>.css`).
    #[arg(long, env = "PIZZAZ_KENDO_ASSET_BASE", default_value = DEFAULT_KENDO_ASSET_BASE)]
    kendo_asset_base: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.serve.log_level, cli.serve.log_format)?;

    let server =
        PizzazServer::new(cli.catalog, &cli.kendo_asset_base).context("build widget catalog")?;
    tracing::info!(
        catalog = ?cli.catalog,
        widgets = server.catalog().len(),
        "widget catalog ready"
    );

    serve(SERVER_NAME, &cli.serve, move || Ok(server.clone())).await
}
