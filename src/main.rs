//! Binary entry point for the classification service.
//!
//! Initializes logging, loads configuration from the environment, wires
//! the Anthropic client into the classification service, and serves the
//! HTTP boundary until shutdown.

use std::sync::Arc;

use g6pd_safety::anthropic::{AnthropicClient, ClientConfig};
use g6pd_safety::classify::ClassificationService;
use g6pd_safety::config::Config;
use g6pd_safety::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("g6pd-safety starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        model = %config.model,
        timeout_ms = config.request_timeout_ms,
        listen_addr = %config.listen_addr,
        "Configuration loaded"
    );

    let client_config = ClientConfig::new()
        .with_base_url(config.base_url.clone())
        .with_model(config.model.clone())
        .with_max_tokens(config.max_output_tokens)
        .with_timeout_ms(config.request_timeout_ms);

    let client = match AnthropicClient::new(config.api_key.clone(), client_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Client error: {e}");
            std::process::exit(1);
        }
    };

    let service = Arc::new(ClassificationService::new(client));

    if let Err(e) = server::serve(&config.listen_addr, service).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("g6pd-safety shutdown complete");
}
