//! Server configuration

use anyhow::Result;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;

/// Base name of the optional config file (portfolio.toml, portfolio.json, ...)
const CONFIG_FILE_STEM: &str = "portfolio";

/// Prefix for environment overrides (PORTFOLIO_PORT, PORTFOLIO_LOG_FILTER, ...)
const ENV_PREFIX: &str = "PORTFOLIO";

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_ip")]
    pub ip: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_ip() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "portfolio_site=info,dioxus=info".to_string()
}

/// Load configuration from `portfolio.*` in the working directory and the environment.
pub fn load_config() -> Result<ServerConfig> {
    load_config_from(Path::new(CONFIG_FILE_STEM))
}

/// Load configuration with an explicit config file base path (extension optional).
pub fn load_config_from(file: &Path) -> Result<ServerConfig> {
    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("ip", default_ip().to_string())?
        .set_default("port", default_port() as i64)?
        .set_default("log_filter", default_log_filter())?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&file.to_string_lossy()).required(false))
        // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_IP, etc.)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PORTFOLIO_PORT > PORT > config file > default
    if std::env::var(format!("{ENV_PREFIX}_PORT")).is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
