//! # HTTP Server
//!
//! Combines the climate routes with request tracing and CORS middleware and
//! runs them on a tokio listener.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::climate_routes::climate_routes;
use super::config::HttpServerConfig;
use crate::query::ClimateQueries;

/// HTTP server for the climate API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(queries: ClimateQueries) -> Self {
        Self::with_config(HttpServerConfig::default(), queries)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, queries: ClimateQueries) -> Self {
        let router = Self::build_router(&config, Arc::new(queries));
        Self { config, router }
    }

    /// Build the router with all endpoints and middleware
    fn build_router(config: &HttpServerConfig, queries: Arc<ClimateQueries>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new().allow_origin(Any).allow_methods(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
        };

        climate_routes(queries).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C is received
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, "climate API listening");
        tracing::info!("welcome page: http://{}/", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("climate API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
