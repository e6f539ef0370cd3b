//! Character API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p dnd-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use anyhow::Context;
use dnd_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_env(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage,
        address = %config.server.address(),
        "Configuration loaded"
    );

    dnd_api::run(config).await.context("Server failed")?;

    Ok(())
}
