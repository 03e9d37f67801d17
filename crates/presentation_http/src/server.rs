//! Server lifecycle
//!
//! Serves the router until a shutdown signal arrives, then gives open
//! connections a bounded time to finish.

use std::{io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{error, info, warn};

/// Serve `app` until `shutdown` completes
///
/// After `shutdown` resolves, new connections are refused and in-flight
/// requests get `drain_timeout` to complete. Connections still open after
/// that are dropped.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let signalled = Arc::clone(&draining);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            signalled.notify_one();
        })
        .into_future();

    tokio::select! {
        result = server => result,
        () = async {
            draining.notified().await;
            info!("Waiting up to {:?} for connections to close...", drain_timeout);
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(?drain_timeout, "Connections still open, forcing shutdown");
            Ok(())
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
