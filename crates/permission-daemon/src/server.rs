//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::scheduler::PermissionMutator;
use crate::storage::{InMemoryProfileStore, ProfileStorage};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Permission daemon server
pub struct Server {
    config: DaemonConfig,
    storage: Arc<dyn ProfileStorage>,
    mutator: Arc<PermissionMutator>,
    shutdown_tx: watch::Sender<bool>,
}

impl Server {
    /// Create a new server with a seeded store
    pub async fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let storage: Arc<dyn ProfileStorage> = Arc::new(InMemoryProfileStore::new());

        // Seed before any traffic can reach the store
        storage.load_seed().await;

        let mutator = PermissionMutator::new(storage.clone());
        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            config,
            storage,
            mutator,
            shutdown_tx,
        })
    }

    /// Shared handle to the store
    pub fn storage(&self) -> Arc<dyn ProfileStorage> {
        self.storage.clone()
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.storage.clone());
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Permission daemon listening on {}", addr);

        // Start mutator in background
        let mutator_handle = self.mutator.clone().spawn(self.shutdown_tx.subscribe());

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()));

        tracing::info!("Permission daemon shutting down");

        // Stop mutator
        self.shutdown_tx.send_replace(true);
        if let Err(e) = mutator_handle.await {
            tracing::error!(error = %e, "Permission mutator task failed");
        }

        result
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
