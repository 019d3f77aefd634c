//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Bind the configured port and serve until Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests get `SHUTDOWN_TIMEOUT_MS` to finish once the
    /// signal fires.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };
        let app = build_app(state);

        let addr = listener.local_addr()?;
        tracing::info!("🍽️ Seating server listening on {}", addr);

        let (stop_tx, mut stop_rx) = tokio::sync::watch::channel(false);
        let mut server = tokio::spawn(
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.changed().await;
                })
                .into_future(),
        );

        tokio::select! {
            finished = &mut server => {
                return finished
                    .map_err(|e| ServerError::Internal(e.into()))?
                    .map_err(ServerError::from);
            }
            _ = shutdown => {
                tracing::info!("Shutting down...");
            }
        }

        let _ = stop_tx.send(true);
        match tokio::time::timeout(self.config.shutdown_timeout(), &mut server).await {
            Ok(finished) => finished
                .map_err(|e| ServerError::Internal(e.into()))?
                .map_err(ServerError::from)?,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Graceful shutdown timed out, dropping open connections"
                );
                server.abort();
            }
        }
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
