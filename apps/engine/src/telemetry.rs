use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Installs the global tracing subscriber from `config.rust_log`.
///
/// Fails instead of panicking when the host already installed a subscriber.
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(&config.rust_log)?)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

/// A bare level ("debug") is scoped to this crate; anything else is taken as
/// a full directive list ("warn,cv_engine=trace").
fn build_filter(rust_log: &str) -> Result<EnvFilter> {
    let rust_log = rust_log.trim();
    let directives = if LEVELS.contains(&rust_log.to_lowercase().as_str()) {
        format!("{}={}", env!("CARGO_CRATE_NAME"), rust_log.to_lowercase())
    } else {
        rust_log.to_string()
    };
    EnvFilter::try_new(&directives).with_context(|| format!("Invalid RUST_LOG value '{rust_log}'"))
}
