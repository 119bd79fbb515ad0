//! Server bootstrap: store construction, listener, graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use stockroom_inventory::InMemoryAssetStore;

use crate::app::{self, SharedStore};
use crate::config::Config;

/// Store for a fresh process, per `seed_inventory`.
pub fn initial_store(config: &Config) -> SharedStore {
    if config.seed_inventory {
        Arc::new(InMemoryAssetStore::seeded())
    } else {
        Arc::new(InMemoryAssetStore::new())
    }
}

/// Bind, serve until Ctrl-C / SIGTERM, then drain in-flight requests.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = initial_store(&config);
    info!(records = store.len(), "inventory store initialized");

    let app = app::build_app(store, &config.public_dir);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local_addr = listener.local_addr()?;
    info!(public_dir = %config.public_dir.display(), "listening on {local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
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
