//! # Fracbond Server
//!
//! REST services around the Fracbond pricing and portfolio libraries.
//!
//! ## Services
//!
//! - **Pricing** (`POST /price_bond`): per-fraction price, seller proceeds
//!   and buyer economics of a bond
//! - **Recommendation** (`POST /score`, `POST /recommend`): portfolio risk and
//!   bond replacement proposals
//!
//! Both expose `GET /api/v1/health` and read an optional TOML configuration.
//!
//! ## Usage
//!
//! ```ignore
//! use fracbond_server::{Server, ServerConfig, Service};
//!
//! let server = Server::new(Service::Pricing, ServerConfig::pricing_default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ServerError;

/// Which service a server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Fraction pricing.
    Pricing,
    /// Portfolio scoring and recommendations.
    Recommendation,
}

impl Service {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Recommendation => "recommendation",
        }
    }
}

/// A Fracbond server.
pub struct Server {
    service: Service,
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(service: Service, config: ServerConfig) -> Self {
        Self { service, config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let router = match self.service {
            Service::Pricing => routes::pricing_router(self.config.clone()),
            Service::Recommendation => routes::recommendation_router(),
        }
        .layer(TraceLayer::new_for_http());

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Fracbond {} server on {}", self.service.name(), addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
