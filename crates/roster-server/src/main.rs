//! # Roster Server
//!
//! Main entry point for the Roster employee service.

use roster_config::{AppConfig, ConfigLoader};
use roster_core::{RosterError, RosterResult};
use roster_rest::create_router;
use roster_server::{di, startup, telemetry};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_telemetry(&config.observability) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    startup::print_banner();
    info!("Starting Roster Server v{}", env!("CARGO_PKG_VERSION"));

    let result = run(config).await;
    telemetry::shutdown_telemetry();

    if let Err(e) = result {
        error!(code = e.error_code(), "Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RosterResult<()> {
    let wiring = di::wire(&config.database).await?;
    let router = create_router(wiring.state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::Internal(format!("Server error: {}", e)))?;

    if let Some(pool) = wiring.pool {
        pool.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
