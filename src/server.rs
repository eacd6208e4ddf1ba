//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Rentals API.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Runs every request inside a fresh trace context so error responses carry
/// a correlation id.
async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let context = TraceContext {
        trace_id: Uuid::new_v4().to_string(),
    };
    telemetry::with_trace_context(context, next.run(request)).await
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/tenants", post(handlers::tenants::create_tenant))
        .route(
            "/tenants/{cognito_id}",
            get(handlers::tenants::get_tenant).put(handlers::tenants::update_tenant),
        )
        .route(
            "/tenants/{cognito_id}/current-residences",
            get(handlers::tenants::get_current_residences),
        )
        .route(
            "/tenants/{cognito_id}/favorites/{property_id}",
            post(handlers::tenants::add_favorite_property)
                .delete(handlers::tenants::remove_favorite_property),
        )
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configured bind address before moving config into state
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let profile = config.profile.clone();

    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to install shutdown signal handler");
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::tenants::get_tenant,
        crate::handlers::tenants::create_tenant,
        crate::handlers::tenants::update_tenant,
        crate::handlers::tenants::get_current_residences,
        crate::handlers::tenants::add_favorite_property,
        crate::handlers::tenants::remove_favorite_property,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::geo::Coordinates,
            crate::handlers::tenants::TenantDto,
            crate::handlers::tenants::PropertySummaryDto,
            crate::handlers::tenants::LocationDto,
            crate::handlers::tenants::ResidenceDto,
            crate::handlers::tenants::CreateTenantRequestDto,
            crate::handlers::tenants::UpdateTenantRequestDto,
        )
    ),
    info(
        title = "Rentals API",
        description = "API for the tenant resource of the rentals platform",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
