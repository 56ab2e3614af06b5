use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::CatalogFetcher;
use crate::propagation::Sgp4Propagator;

use super::api::health as health_handlers;
use super::api::risk as risk_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<CatalogFetcher>,
    pub propagator: Arc<Sgp4Propagator>,
}

impl AppState {
    pub fn new(config: Config) -> std::io::Result<Self> {
        let fetcher = CatalogFetcher::new(config.catalog.clone())
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            propagator: Arc::new(Sgp4Propagator::new()),
        })
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::index))
        // Risk API endpoints
        .route("/api/health", get(health_handlers::health))
        .route("/api/orbit_risk", get(risk_handlers::orbit_risk))
        .route("/api/takeoff_risk", get(risk_handlers::takeoff_risk))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let app = router(AppState::new(config)?);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
