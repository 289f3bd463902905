use clap::{Args, ValueEnum};
use std::net::SocketAddr;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Listener and logging flags shared by every server binary.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "SKYBRIDGE_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Port override for `--bind` (hosting platforms usually inject `PORT`).
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Default log filter; `RUST_LOG` takes precedence when set.
    #[arg(long, env = "SKYBRIDGE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format (`text` or `json`).
    #[arg(long, env = "SKYBRIDGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl ServeArgs {
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        let mut addr = self.bind;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }
}

#[cfg(test)]
mod tests {
    use super::{LogFormat, ServeArgs};
    use clap::{CommandFactory, Parser};

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn explicit_flags_parse() {
        let cli = TestCli::try_parse_from([
            "test",
            "--bind",
            "127.0.0.1:9000",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .expect("flags parse");
        assert_eq!(cli.serve.bind.to_string(), "127.0.0.1:9000");
        assert_eq!(cli.serve.log_level, "debug");
        assert_eq!(cli.serve.log_format, LogFormat::Json);
    }

    #[test]
    fn port_overrides_bind_port() {
        let cli = TestCli::try_parse_from(["test", "--bind", "127.0.0.1:9000", "--port", "7001"])
            .expect("flags parse");
        assert_eq!(cli.serve.listen_addr().to_string(), "127.0.0.1:7001");
    }

    #[test]
    fn invalid_bind_is_rejected() {
        assert!(TestCli::try_parse_from(["test", "--bind", "not-an-addr"]).is_err());
    }

    #[test]
    fn every_flag_has_help_text() {
        let help = TestCli::command().render_long_help().to_string();
        for text in [
            "Address to listen on",
            "Port override",
            "Default log filter",
            "Log output format",
        ] {
            assert!(help.contains(text), "missing {text:?} in:\n{help}");
        }
    }
}
