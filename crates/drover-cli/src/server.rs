//! HTTP listener primitive for serve mode.
//!
//! One [`Listener`] per serve target: bound after the watch session starts,
//! closed only after the rebuild stream has ended.

use crate::error::{CliError, Result};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

/// One bound HTTP listener serving a directory handler.
///
/// The listener owns its serve task. [`Listener::close`] initiates a
/// graceful shutdown and resolves only once the task has fully stopped, so
/// a closed listener never has a request still in flight.
#[derive(Debug)]
pub struct Listener {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl Listener {
    /// Bind `handler` on `host:port` and start serving.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ListenerBind`] when the address cannot be bound.
    pub async fn bind(handler: Router, host: &str, port: u16) -> Result<Self> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|source| CliError::ListenerBind {
                host: host.to_string(),
                port,
                source,
            })?;
        let addr = listener.local_addr()?;

        // CORS: allow all origins, same as any local dev server.
        let app = handler.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::debug!(%addr, "listener bound");
        Ok(Self {
            addr,
            shutdown: Some(shutdown_tx),
            task,
        })
    }

    /// Address the listener is actually bound on.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shut the listener down and wait for the serve task to stop.
    pub async fn close(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let _ = self.task.await;
        tracing::debug!(addr = %self.addr, "listener closed");
    }
}
