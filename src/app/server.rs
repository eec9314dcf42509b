use crate::app::{router, AppState};
use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
    state: AppState,
}

impl Server {
    pub fn new(state: AppState) -> Result<Self> {
        let addr = state.config.server.socket_addr()?;
        Ok(Self { addr, state })
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Binds the listener and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails.
    pub async fn run(self) -> Result<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.addr).await?;

        tracing::info!(
            "🚀 Server listening on http://{} (store: {})",
            self.addr,
            self.state.directory.backend()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("👋 Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("⚡ Received Ctrl+C, shutting down gracefully..."),
        () = terminate => tracing::info!("⚡ Received SIGTERM, shutting down gracefully..."),
    }
}
