// Creature registry HTTP server
//
// Loads the bulk dataset once, then serves the `/records` API until Ctrl-C.
// Configuration comes from CREATURES_* environment variables.

use anyhow::{Context, Result};
use kodegen_tools_creatures::{HttpUrlProbe, ServiceConfig, load_api, server};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .init();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let config = ServiceConfig::from_env()?;
    let probe = Arc::new(HttpUrlProbe::from_config(&config)?);

    let (api, summary) = load_api(config.clone(), probe)
        .await
        .context("Startup dataset load failed")?;

    let listener = server::bind(&config)?;
    log::info!(
        "Serving {} records on http://{}",
        summary.loaded,
        server::local_addr(&listener)?
    );

    server::serve(listener, api, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    })
    .await
}
