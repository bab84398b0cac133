//! Server start-up: logging, configuration, and navigation table checks.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::navigation::{self, NAV_ENTRIES};
use crate::config::{self, ServerConfig};

/// Prepare the process before handing control to `dioxus::launch`.
pub fn prepare() -> Result<ServerConfig> {
    let config = config::load_config().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::info!(
        "Starting portfolio site v{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("SITE_GIT_SHA")
    );

    navigation::validate(NAV_ENTRIES).context("Invalid navigation table")?;
    tracing::info!("Navigation table loaded, {} entries", NAV_ENTRIES.len());

    export_address(&config);
    Ok(config)
}

/// Hand the bind address to the Dioxus server, which reads IP and PORT.
///
/// `dx serve` sets both for its dev proxy; those values win.
fn export_address(config: &ServerConfig) {
    if std::env::var_os("IP").is_none() {
        std::env::set_var("IP", config.ip.to_string());
    }
    if std::env::var_os("PORT").is_none() {
        std::env::set_var("PORT", config.port.to_string());
    }
    tracing::info!(
        "Listening on http://{}:{}",
        std::env::var("IP").unwrap_or_default(),
        std::env::var("PORT").unwrap_or_default()
    );
}
