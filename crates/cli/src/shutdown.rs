//! Shutdown signal handling (SIGINT / SIGTERM)

use tokio::signal;
use tracing::{info, warn};

/// Resolve once the process is asked to stop
///
/// If a handler cannot be installed that source is ignored rather than
/// treated as an immediate shutdown.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), stopping watcher");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping watcher");
        }
    }
}
