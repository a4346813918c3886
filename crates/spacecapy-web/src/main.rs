//! spacecapy web server.
//!
//! - `GET /`        : random capybara image + visitor count
//! - `GET /metrics` : Prometheus text format
//! - Graceful shutdown on Ctrl-C / SIGTERM (readiness flips to draining first)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacecapy_core::error::{Result, SpaceCapyError};
use spacecapy_web::{app_state::AppState, config, obs::AppMetrics, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code(), error = %e, "spacecapy-web exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.listen_addr()?;

    let state = AppState::build(cfg).await?;
    let metrics = state.metrics();
    let app = router::build_router(state);

    tracing::info!(%listen, "spacecapy-web starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SpaceCapyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(metrics))
        .await
        .map_err(|e| SpaceCapyError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(metrics: std::sync::Arc<AppMetrics>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    metrics.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
