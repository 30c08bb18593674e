//! HTTP server
//!
//! Assembles the full router (health probe, cupcake API under `/api`,
//! CORS and request tracing) and serves it.

use std::io;
use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::CupcakeStore;

use super::config::ServerConfig;
use super::cupcake_routes::{cupcake_routes, ApiState};

/// HTTP server for the cupcake API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from a config and a connected store
    pub fn new(config: ServerConfig, store: CupcakeStore) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is killed
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "serving cupcake API");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

/// Combine all routes and middleware
fn build_router(config: &ServerConfig, store: CupcakeStore) -> Router {
    let cors = if config.cors_origins.is_empty() {
        // No origins configured: permissive, for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes())
        .nest("/api", cupcake_routes(ApiState::new(store)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check route at root level
fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_server() -> HttpServer {
        let store = CupcakeStore::connect("sqlite::memory:").await.unwrap();
        store.init_schema().await.unwrap();
        HttpServer::new(ServerConfig::default(), store)
    }

    #[tokio::test]
    async fn test_server_socket_addr() {
        let server = test_server().await;
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[tokio::test]
    async fn test_router_builds() {
        let server = test_server().await;
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_router_builds_with_origin_list() {
        let store = CupcakeStore::connect("sqlite::memory:").await.unwrap();
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, store).router();
    }
}
