use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::lead::{build_relay_payload, validate_submission};
use crate::models::{ContactSuccess, ErrorResponse, HealthResponse, LeadSubmission};
use crate::relay_client::EmailRelayClient;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

/// Shared application state injected into handlers.
///
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Pooled client for the email relay.
    pub relay: EmailRelayClient,
}

impl AppState {
    /// Builds the state, creating the relay client from the configuration.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let relay = EmailRelayClient::from_config(&config)?;
        Ok(Self { config, relay })
    }
}

/// OpenAPI document for the JSON endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact, health),
    components(schemas(LeadSubmission, ContactSuccess, ErrorResponse, HealthResponse)),
    tags((name = "leads", description = "Contact form lead relay"))
)]
pub struct ApiDoc;

/// Health check endpoint.
///
/// Returns the service status, name and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// POST /api/contact
///
/// Validates a contact-form lead and forwards it to the email relay.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that a malformed body answers with the generic 500 like any other
/// internal failure, whatever the request's content type.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `body` - Raw JSON body holding a `LeadSubmission`.
///
/// # Returns
///
/// * `Result<(StatusCode, Json<ContactSuccess>), AppError>` - 200 on relay
///   acceptance; 400, or 500 with or without upstream details, otherwise.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "leads",
    request_body = LeadSubmission,
    responses(
        (status = 200, description = "Lead relayed", body = ContactSuccess),
        (status = 400, description = "Missing name, phone or email", body = ErrorResponse),
        (status = 500, description = "Relay refused the lead or internal failure", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactSuccess>), AppError> {
    let submission_id = Uuid::new_v4();

    let submission: LeadSubmission = serde_json::from_slice::<LeadSubmission>(&body)
        .map_err(AppError::from)
        .with_context(|| format!("Decoding contact submission {}", submission_id))?;

    tracing::info!(
        "📨 Received contact submission {} (interest: {})",
        submission_id,
        submission
            .property_interest
            .as_deref()
            .unwrap_or("none given")
    );

    // No outbound call before the required fields are proven present
    let lead = validate_submission(submission)?;

    let payload = build_relay_payload(&lead, &state.config, Utc::now());

    state
        .relay
        .deliver(&payload)
        .await
        .with_context(|| format!("Relaying contact submission {}", submission_id))?;

    tracing::info!("✓ Contact submission {} relayed", submission_id);

    Ok((
        StatusCode::OK,
        Json(ContactSuccess {
            success: true,
            message: "Email sent successfully".to_string(),
        }),
    ))
}

/// Serves the generated OpenAPI document as JSON.
pub async fn serve_openapi_spec() -> Response {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            content,
        )
            .into_response(),
        Err(e) => AppError::InternalError(format!("Failed to render OpenAPI document: {}", e))
            .into_response(),
    }
}

/// Serves the Swagger UI HTML page.
///
/// The page loads the document served by `serve_openapi_spec`.
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lead Relay API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_package() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "estate-lead-relay");
    }

    #[test]
    fn test_openapi_lists_contact_route() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("/api/contact"));
        assert!(json.contains("LeadSubmission"));
    }
}
