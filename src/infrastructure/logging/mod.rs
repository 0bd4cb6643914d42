// Logging module - Logging infrastructure
use crate::domain::error::{NixGlHostError, NixGlHostResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Environment variable holding tracing filter directives
pub const LOG_ENV: &str = "NIXGLHOST_LOG";

/// Initialize logging system
///
/// `default_directives` applies when `NIXGLHOST_LOG` is unset or invalid.
/// Everything goes to stderr so the launched program owns stdout.
pub fn init_logging(default_directives: &str) -> NixGlHostResult<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| NixGlHostError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    tracing::debug!("nixglhost logging system initialized");
    Ok(())
}
