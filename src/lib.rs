pub mod api;
pub mod config;
pub mod insights; // Document insights summarizer
pub mod intake; // Patient history intake
pub mod pipeline;
pub mod visit; // Provider visit review

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub use pipeline::extraction::{extract, extract_optional, ExtractionResult, MedicalTermExtractor};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] api::ServerError),
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Run the extraction service until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::ServiceConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        max_text_chars = config.max_text_chars,
        gating = config.extractor.gating.as_str(),
        "Configuration loaded"
    );

    let server = api::start_server(Arc::new(config)).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(api::ServerError::Signal)?;

    tracing::info!("Shutdown requested");
    server.shutdown_and_wait().await;
    Ok(())
}
