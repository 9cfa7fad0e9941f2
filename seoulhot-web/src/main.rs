//! seoulhot-web - Seoul festival recommendation site
//!
//! Renders the district, festival list and festival detail pages server
//! side. Detail pages are filled from the recommendation API.

use anyhow::{Context, Result};
use clap::Parser;
use seoulhot_common::config::{load_config_file, SiteConfig};
use tokio::signal;
use tracing::info;

use seoulhot_web::cli::Args;
use seoulhot_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification right after tracing init
    info!(
        "Starting seoulhot-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let file_layer = load_config_file(args.config.as_deref()).context("Failed to load config file")?;
    let config = SiteConfig::resolve(&args.overrides(), &file_layer).context("Invalid configuration")?;

    info!("Recommendation API: {}", config.api_base_url);
    info!("Recommendations per track: {}", config.top_n);
    match &config.templates_dir {
        Some(dir) => info!("Template overrides: {}", dir.display()),
        None => info!("Using built-in templates"),
    }

    let state = AppState::from_config(&config).context("Failed to create recommendation client")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("seoulhot-web listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
