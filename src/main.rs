use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::database::ActivityRegistry;
use activities::web;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    info!(build_id = env!("ACTIVITIES_BUILD_ID"), "Starting activities service");

    let registry = match ActivityRegistry::seeded() {
        Ok(r) => Arc::new(r),
        Err(e) => {
            error!("Failed to seed activity registry: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let names = registry.names();
    info!(count = names.len(), activities = ?names, "Activity registry seeded");

    let app = web::router(registry, &config.static_dir);

    let listener = match bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("Could not bind {} or fallback port: {}", config.address(), e);
            return ExitCode::FAILURE;
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("Server running on http://{}", addr),
        Err(e) => warn!("Server running, local address unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server shut down");
    ExitCode::SUCCESS
}

async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    let address = config.address();
    match TcpListener::bind(&address).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = format!("{}:{}", config.host, config.port.saturating_add(1));
            warn!("Could not bind {}: {}. Trying fallback {}", address, e, fallback);
            TcpListener::bind(&fallback).await
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
