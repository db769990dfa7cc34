use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use pulse_api::config::PulseConfig;
use pulse_api::router::build_router;
use pulse_core::shutdown::{SHUTDOWN_TIMEOUT, drain_with_deadline, shutdown_signal};
use pulse_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    dotenv::dotenv().ok();
    init_tracing();

    let config = match PulseConfig::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(error = %e, kind = e.kind(), variable = e.variable(), "config load error");
            eprintln!("Config load error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "server start error");
            eprintln!("Server start error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Arc<PulseConfig>) -> anyhow::Result<()> {
    info!(
        server = ?config.server,
        database = ?config.database,
        jwt = ?config.jwt,
        production = config.is_production(),
        development = config.is_development(),
        "configuration loaded"
    );

    let addr = config.server.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("api listening on {addr}");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let router = build_router(config);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        () = shutdown_signal() => {}
        res = &mut server => {
            res.context("server task panicked")?.context("server error")?;
            anyhow::bail!("server stopped before any shutdown signal");
        }
    }

    info!("gracefully shutting down");
    let _ = stop_tx.send(());

    match drain_with_deadline(server, SHUTDOWN_TIMEOUT).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => error!(error = %e, "server shutdown error"),
        Ok(Err(e)) => error!(error = %e, "server task failed during shutdown"),
        Err(e) => error!(error = %e, "server shutdown error"),
    }

    info!("server stopped");
    Ok(())
}
