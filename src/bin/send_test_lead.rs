//! Script to post one sample lead to a running instance.
//!
//! Usage: `send-test-lead [BASE_URL] [PROPERTY_INTEREST]`
//! (`BASE_URL` defaults to `SITE_BASE_URL` or `http://localhost:3000`).
//! With a property of interest the modal form is used, otherwise the inline
//! page form.

use dotenvy::dotenv;
use estate_lead_relay::core::form::{ContactClient, Field, LeadForm, SubmitStatus};
use std::env;

/// Main entry point for the test-lead script.
///
/// Fills a lead form with sample values, submits it through the contact
/// endpoint and exits non-zero unless the relay accepted the lead.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let base_url = args
        .next()
        .or_else(|| env::var("SITE_BASE_URL").ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let property_interest = args.next();

    let client = ContactClient::new(&base_url)?;

    let mut form = match property_interest {
        Some(interest) => {
            let mut form = LeadForm::modal(interest);
            form.set_field(Field::Country, "UAE");
            form.set_field(Field::PropertyType, "Penthouse");
            form
        }
        None => LeadForm::page(),
    };
    form.set_field(Field::Name, "Test Lead");
    form.set_field(Field::Phone, "+971500000000");
    form.set_field(Field::Email, "test-lead@example.com");
    form.set_field(Field::Message, "Test submission, please ignore.");

    tracing::info!("Submitting sample lead to {}", client.endpoint());

    match form.submit(&client).await {
        SubmitStatus::Success => {
            tracing::info!("✓ Lead relayed successfully");
            Ok(())
        }
        status => {
            tracing::error!("Lead submission ended with status {:?}", status);
            Err(format!("submission failed ({:?})", status).into())
        }
    }
}
