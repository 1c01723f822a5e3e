//! HTTP surface of the Bistro gateway
//!
//! Assembles the feature routers, the liveness probe and the middleware
//! stack, and runs the listener until shutdown is requested.

#![allow(clippy::must_use_candidate)]

mod cors;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bistro_config::{Config, CorsConfig};
use bistro_llm::Provider;
use bistro_places::{LocationResolver, PlacesProvider};
use tower_http::trace::TraceLayer;

pub use health::HealthStatus;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Missing credentials do not fail here; the affected upstream calls
    /// fail when made.
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream HTTP client cannot be constructed
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let llm = bistro_llm::build_provider(&config.llm)
            .map_err(|e| anyhow::anyhow!("Failed to initialize language model provider: {e}"))?;
        let resolver = bistro_places::build_resolver(&config.places)?;

        Ok(Self::assemble(config, llm, resolver))
    }

    /// Build the server around caller-supplied upstream providers
    pub fn with_providers(config: &Config, llm: Arc<dyn Provider>, places: Arc<dyn PlacesProvider>) -> Self {
        let resolver = Arc::new(LocationResolver::new(places, &config.places));
        Self::assemble(config, llm, resolver)
    }

    fn assemble(config: &Config, llm: Arc<dyn Provider>, resolver: Arc<LocationResolver>) -> Self {
        let extractor = bistro_menu::build_extractor(config, Arc::clone(&llm));
        let agent = bistro_agent::build_agent(config, llm);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            let status = Arc::new(HealthStatus::from_config(config));
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler).with_state(status),
            );
        }

        app = app.merge(bistro_places::endpoint_router().with_state(resolver));
        app = app.merge(bistro_menu::endpoint_router(config.menu.max_upload_bytes).with_state(extractor));
        app = app.merge(bistro_agent::endpoint_router().with_state(agent));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        let cors = config.server.cors.clone().unwrap_or_else(CorsConfig::permissive);
        app = app.layer(cors::cors_layer(&cors));

        Self {
            router: app,
            listen_address: config.server.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
