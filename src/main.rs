//! Practice Portal server entry point.

#![allow(clippy::unused_async)]

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::{error, info};

use practice_portal::config::AppConfig;
use practice_portal::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    // Load .env (if present)
    let _ = dotenv();

    telemetry::init();

    let config = match AppConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    info!(
        port = config.server.port,
        practice = %config.site.practice_name,
        demo_account = config.demo.enabled,
        "Configuration loaded"
    );

    if let Err(e) = server::start_server(config).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
