/// Lead form round trips
/// Drives the form controller against a mocked contact endpoint and against
/// a live server whose email relay is mocked
use estate_lead_relay::api::handlers::AppState;
use estate_lead_relay::api::routes::build_router;
use estate_lead_relay::config::Config;
use estate_lead_relay::core::form::{
    ContactClient, Field, FormError, LeadForm, SubmitStatus, MODAL_CLOSE_DELAY,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fill(form: &mut LeadForm) {
    form.set_field(Field::Name, "Jane Doe");
    form.set_field(Field::Phone, "+971500000000");
    form.set_field(Field::Email, "jane@example.com");
    form.set_field(Field::Message, "Four bedrooms, beach access");
}

/// Starts the real router on an ephemeral port and returns its base URL.
async fn spawn_site(relay_endpoint: String) -> String {
    let config = Config {
        port: 0,
        relay_endpoint,
        relay_access_key: "test-access-key".to_string(),
        recipient_email: "info@example.com".to_string(),
        from_name: "Rishi Malik Website".to_string(),
        utc_offset_minutes: 240,
        forward_message: false,
    };
    let app = build_router(Arc::new(AppState::new(config).unwrap()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_page_form_sends_fixed_values_and_resets() {
    let site = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_partial_json(json!({
            "name": "Jane Doe",
            "phone": "+971500000000",
            "email": "jane@example.com",
            "country": "UAE",
            "propertyType": "Luxury Real Estate",
            "message": "Four bedrooms, beach access"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Email sent successfully"
        })))
        .expect(1)
        .mount(&site)
        .await;

    let client = ContactClient::new(&site.uri()).unwrap();
    let mut form = LeadForm::page();
    fill(&mut form);

    let status = form.submit(&client).await;

    assert_eq!(status, SubmitStatus::Success);
    assert!(!form.is_submitting());
    for field in [Field::Name, Field::Phone, Field::Email, Field::Message] {
        assert_eq!(form.field(field), "", "{:?} not cleared", field);
    }
}

#[tokio::test]
async fn test_failed_reply_keeps_fields() {
    let site = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to send email",
            "details": { "success": false }
        })))
        .mount(&site)
        .await;

    let client = ContactClient::new(&site.uri()).unwrap();
    let mut form = LeadForm::page();
    fill(&mut form);

    let status = form.submit(&client).await;

    assert_eq!(status, SubmitStatus::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.field(Field::Name), "Jane Doe");
    assert_eq!(form.field(Field::Message), "Four bedrooms, beach access");
}

#[tokio::test]
async fn test_client_reports_rejection_and_transport_errors() {
    let site = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing required fields" })),
        )
        .mount(&site)
        .await;

    let client = ContactClient::new(&site.uri()).unwrap();
    let err = client
        .send(&Default::default())
        .await
        .unwrap_err();
    match err {
        FormError::Rejected { status, error } => {
            assert_eq!(status, 400);
            assert_eq!(error.as_deref(), Some("Missing required fields"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let offline = ContactClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();
    let mut form = LeadForm::page();
    fill(&mut form);
    assert_eq!(form.submit(&offline).await, SubmitStatus::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.field(Field::Email), "jane@example.com");
}

#[tokio::test]
async fn test_modal_form_end_to_end_through_live_server() {
    let relay = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&relay)
        .await;

    let base_url = spawn_site(format!("{}/submit", relay.uri())).await;
    let client = ContactClient::new(&base_url).unwrap();

    let mut form = LeadForm::modal("Omniyat Orla Sky Residence");
    fill(&mut form);
    form.set_field(Field::Country, "India");
    form.set_field(Field::PropertyType, "Sky Residence");

    // Pending state is visible between the two halves of a submission
    let submission = form.begin_submit().unwrap();
    assert!(form.is_submitting());
    assert_eq!(form.status(), SubmitStatus::Pending);
    assert!(form.begin_submit().is_none());

    let outcome = client.send(&submission).await;
    assert_eq!(form.finish_submit(&outcome), Some(MODAL_CLOSE_DELAY));
    assert_eq!(form.status(), SubmitStatus::Success);
    assert!(!form.is_submitting());
    assert_eq!(form.field(Field::Country), "");

    let requests = relay.received_requests().await.unwrap();
    let payload: Value = requests[0].body_json().unwrap();
    assert_eq!(
        payload["subject"],
        "New Property Inquiry: Omniyat Orla Sky Residence"
    );
    let message = payload["message"].as_str().unwrap();
    assert!(message.contains("- Country: India"));
    assert!(message.contains("- Property Type: Sky Residence"));
}

#[tokio::test]
async fn test_modal_closes_after_success_delay() {
    let site = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Email sent successfully"
        })))
        .mount(&site)
        .await;

    let client = ContactClient::new(&site.uri()).unwrap();
    let delay = Duration::from_millis(50);
    let mut form = LeadForm::modal("Six Senses Residences").with_close_delay(delay);
    fill(&mut form);

    let started = Instant::now();
    assert_eq!(form.submit(&client).await, SubmitStatus::Success);
    assert!(started.elapsed() >= delay);
    assert!(!form.is_open());

    // the inline page form has nothing to close
    let mut page = LeadForm::page();
    fill(&mut page);
    assert_eq!(page.submit(&client).await, SubmitStatus::Success);
    assert!(page.is_open());
}

#[tokio::test]
async fn test_failed_modal_stays_open() {
    let site = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Internal server error"
        })))
        .mount(&site)
        .await;

    let client = ContactClient::new(&site.uri()).unwrap();
    let mut form = LeadForm::modal("Six Senses Residences").with_close_delay(Duration::ZERO);
    fill(&mut form);

    assert_eq!(form.submit(&client).await, SubmitStatus::Error);
    assert!(form.is_open());
    assert_eq!(form.field(Field::Name), "Jane Doe");
}
