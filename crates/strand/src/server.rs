use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use analysis::{MemoryStringStore, StringService};

use crate::config::ServerConfig;

pub mod error;
pub mod openapi;
pub mod strings;

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    /// Binds the configured address and serves the API until shutdown.
    pub async fn start(config: &ServerConfig) -> Result<Self, String> {
        let strings = StringService::new(Arc::new(MemoryStringStore::new()));
        let state = Arc::new(ServerState { strings });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = Router::new()
            .route("/health", get(health))
            .route("/api/v1/openapi.json", get(openapi::openapi_json))
            .route(
                "/api/v1/strings",
                post(strings::create).get(strings::list),
            )
            .route(
                "/api/v1/strings/filter-by-natural-language",
                get(strings::filter_by_natural_language),
            )
            .route(
                "/api/v1/strings/:value",
                get(strings::get_by_value).delete(strings::delete_by_value),
            )
            .with_state(state)
            .layer(cors);
        let listener = TcpListener::bind(config.socket_addr())
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener.local_addr().map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        tracing::info!("string analysis API listening on {addr}");

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

async fn health() -> &'static str {
    "ok"
}

pub(crate) struct ServerState {
    pub(crate) strings: StringService,
}
