use anyhow::Context;
use clap::Parser;
use country_preview::utils::{logger, validation::Validate};
use country_preview::{server, CliConfig, LocalStorage, PreviewContext, UuidGenerator};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting country-preview");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.ref_path.clone());
    let ctx = Arc::new(PreviewContext::new(storage, UuidGenerator));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("  - GET http://{}/preview  (assembled country list)", addr);

    server::serve(listener, ctx).await?;
    Ok(())
}
