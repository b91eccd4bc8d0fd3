//! CLI argument parser.
//!
//! Every flag falls back to a `CLAUDEGW_*` environment variable, which
//! `main` may populate from a `.env` file before parsing.

use std::time::Duration;

use clap::Parser;
use claudegw_axum::{CorsConfig, ServerConfig};
use claudegw_provider::DEFAULT_API_URL;

#[derive(Debug, Parser)]
#[command(name = "claudegw")]
#[command(about = "HTTP gateway to the claude.ai web API")]
#[command(version)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "CLAUDEGW_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CLAUDEGW_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Base URL of the claude.ai web API
    #[arg(long, env = "CLAUDEGW_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Allowed CORS origin (repeatable; all origins when omitted)
    #[arg(
        long = "cors-origin",
        env = "CLAUDEGW_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Timeout in seconds for non-streaming provider calls
    #[arg(long, env = "CLAUDEGW_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn into_server_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            api_url: self.api_url,
            timeout: Duration::from_secs(self.timeout_secs),
            cors: CorsConfig::from_origins(self.cors_origins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "claudegw",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--api-url",
            "http://localhost:1234/api",
            "--cors-origin",
            "http://a.test",
            "--cors-origin",
            "http://b.test,http://c.test",
            "--timeout-secs",
            "5",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.default_log_filter(), "debug");

        let config = cli.into_server_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.api_url, "http://localhost:1234/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec![
                "http://a.test".to_string(),
                "http://b.test".to_string(),
                "http://c.test".to_string(),
            ])
        );
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["claudegw", "--port", "http"]).is_err());
    }
}
