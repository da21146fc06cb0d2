//! API server: the studio HTTP service plus the Prometheus exporter.

use crate::rest::{self, AppState};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use studio_core::{AppConfig, Catalog};
use studio_view::ThemeMode;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Studio screen
        .route("/", get(rest::studio_page))
        .route("/studio", get(rest::studio_page))
        // JSON views
        .route("/api/v1/studio/view", get(rest::view_snapshot))
        .route("/api/v1/studio/campaigns", get(rest::list_campaigns))
        // Operational endpoints
        .route("/health", get(rest::health_check))
        .route("/live", get(rest::liveness))
        .fallback(rest::not_found)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct ApiServer {
    config: AppConfig,
    catalog: Catalog,
}

impl ApiServer {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    fn default_theme(&self) -> ThemeMode {
        ThemeMode::parse(&self.config.studio.theme).unwrap_or_else(|| {
            warn!(theme = %self.config.studio.theme, "Unknown default theme, using light");
            ThemeMode::Light
        })
    }

    /// Start the HTTP server and serve until the listener fails.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let state = AppState::new(
            self.catalog.clone(),
            self.default_theme(),
            self.config.node_id.clone(),
        );
        let app = router(state);

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(
            addr = %addr,
            campaigns = self.catalog.campaigns.len(),
            "Starting HTTP server"
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the metrics server on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        if !self.config.metrics.enabled {
            info!("Metrics exporter disabled");
            return Ok(());
        }

        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
