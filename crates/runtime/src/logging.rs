use crate::cli::LogFormat;
use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber (stderr).
///
/// `RUST_LOG` overrides `level` when set.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive or a subscriber is already set.
pub fn init_tracing(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("init tracing: {e}"))
}
