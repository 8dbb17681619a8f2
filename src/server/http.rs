//! HTTP server implementation for the tracker service.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::signal;

use super::config::ServerConfig;
use super::handlers::{
    AppState, handle_add_exercise, handle_create_user, handle_get_log, handle_healthy,
    handle_list_users, handle_ready,
};
use crate::clock::Clock;
use crate::store::UserStore;

/// HTTP server for the tracker service.
pub struct TrackerServer {
    store: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
    config: ServerConfig,
}

impl TrackerServer {
    /// Create a new tracker server.
    pub fn new(store: Arc<dyn UserStore>, clock: Arc<dyn Clock>, config: ServerConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Run the HTTP server.
    pub async fn run(self) {
        let state = AppState {
            store: self.store,
            clock: self.clock,
        };

        let app = Router::new()
            .route(
                "/api/users",
                post(handle_create_user).get(handle_list_users),
            )
            .route("/api/users/{id}/exercises", post(handle_add_exercise))
            .route("/api/users/{id}/logs", get(handle_get_log))
            .route("/-/healthy", get(handle_healthy))
            .route("/-/ready", get(handle_ready))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting tracker HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .unwrap();

        tracing::info!("Server shut down gracefully");
    }
}

/// Listen for SIGTERM (pod termination) and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
