//! Shutdown coordination.
//!
//! ```text
//! SIGINT / SIGTERM → stop accepting → drain in-flight requests → exit
//!                                      (bounded by SHUTDOWN_TIMEOUT)
//! ```

use std::future::Future;
use std::time::Duration;

/// Upper bound on how long in-flight requests may drain after a signal.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Returned by [`drain_with_deadline`] when draining outlives its deadline.
#[derive(Debug, thiserror::Error)]
#[error("graceful shutdown did not finish within {0:?}")]
pub struct ShutdownTimeout(pub Duration);

/// Resolves once the process receives Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!(signal = "SIGINT", "shutdown signal received"),
        () = terminate => tracing::info!(signal = "SIGTERM", "shutdown signal received"),
    }
}

/// Await `drain` for at most `deadline`.
pub async fn drain_with_deadline<F>(
    drain: F,
    deadline: Duration,
) -> Result<F::Output, ShutdownTimeout>
where
    F: Future,
{
    match tokio::time::timeout(deadline, drain).await {
        Ok(out) => Ok(out),
        Err(_) => {
            tracing::warn!(
                ?deadline,
                "in-flight requests still running at shutdown deadline"
            );
            Err(ShutdownTimeout(deadline))
        }
    }
}
