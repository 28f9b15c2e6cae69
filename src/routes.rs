use crate::handlers::{self, AppState};
use crate::site;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest contact-form body accepted.
pub const CONTACT_BODY_LIMIT: usize = 64 * 1024;

/// Builds the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let lead_routes = Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        // Request size limit: a lead is a handful of short strings
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(CONTACT_BODY_LIMIT)));

    Router::new()
        .route("/", get(site::home_page))
        .route("/health", get(handlers::health))
        // API Documentation
        .route("/docs", get(handlers::serve_swagger_ui))
        .route("/api-docs/openapi.json", get(handlers::serve_openapi_spec))
        .merge(lead_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
