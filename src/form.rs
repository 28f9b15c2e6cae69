//! Lead form controller.
//!
//! Mirrors the browser form's behaviour: controlled field state, a submit
//! control that is disabled while a request is pending, and a status banner
//! that only distinguishes success from error. The same flow is embedded in
//! the served page's script; this type drives it from Rust (the
//! `send-test-lead` binary and tests).

use crate::models::{ContactSuccess, LeadSubmission};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Property type sent by the inline page form.
pub const PAGE_PROPERTY_TYPE: &str = "Luxury Real Estate";
/// Country sent by the inline page form.
pub const PAGE_COUNTRY: &str = "UAE";
/// How long the modal shows its success banner before closing.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_secs(3);

pub const PENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Country,
    PropertyType,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormVariant {
    /// Inline contact section; country and property type are fixed.
    Page,
    /// Enquiry dialog opened from a listing.
    Modal { property_interest: String },
}

/// Errors seen by the form when talking to `/api/contact`.
#[derive(Debug, Clone)]
pub enum FormError {
    /// The request never produced a usable reply.
    Transport(String),
    /// The endpoint answered with a non-success reply.
    Rejected {
        status: u16,
        error: Option<String>,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Transport(msg) => write!(f, "Contact request failed: {}", msg),
            FormError::Rejected { status, error } => match error {
                Some(error) => write!(f, "Contact endpoint returned {}: {}", status, error),
                None => write!(f, "Contact endpoint returned {}", status),
            },
        }
    }
}

impl std::error::Error for FormError {}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// HTTP client for the site's own contact endpoint.
#[derive(Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// # Arguments
    ///
    /// * `base_url` - Site origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, FormError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FormError::Transport(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs one submission; `Ok` only for a 2xx reply with `success: true`.
    pub async fn send(&self, submission: &LeadSubmission) -> Result<ContactSuccess, FormError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() && body.get("success").and_then(Value::as_bool) == Some(true) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Ok(ContactSuccess {
                success: true,
                message,
            });
        }

        Err(FormError::Rejected {
            status: status.as_u16(),
            error: body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// State of one lead form.
#[derive(Debug, Clone)]
pub struct LeadForm {
    variant: FormVariant,
    name: String,
    phone: String,
    email: String,
    country: String,
    property_type: String,
    message: String,
    status: SubmitStatus,
    submitting: bool,
    open: bool,
    close_delay: Duration,
}

impl LeadForm {
    fn with_variant(variant: FormVariant) -> Self {
        Self {
            variant,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            country: String::new(),
            property_type: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
            submitting: false,
            open: true,
            close_delay: MODAL_CLOSE_DELAY,
        }
    }

    pub fn page() -> Self {
        Self::with_variant(FormVariant::Page)
    }

    /// Enquiry dialog for one listing.
    pub fn modal(property_interest: impl Into<String>) -> Self {
        Self::with_variant(FormVariant::Modal {
            property_interest: property_interest.into(),
        })
    }

    /// Overrides how long a modal waits after success before closing.
    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    pub fn variant(&self) -> &FormVariant {
        &self.variant
    }

    /// Controlled-input update.
    ///
    /// The page form has no country or property type inputs; those updates
    /// are ignored and `false` is returned.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = match (field, &self.variant) {
            (Field::Country | Field::PropertyType, FormVariant::Page) => {
                tracing::debug!("Page form has no {:?} input", field);
                return false;
            }
            (Field::Name, _) => &mut self.name,
            (Field::Phone, _) => &mut self.phone,
            (Field::Email, _) => &mut self.email,
            (Field::Country, _) => &mut self.country,
            (Field::PropertyType, _) => &mut self.property_type,
            (Field::Message, _) => &mut self.message,
        };
        *slot = value.into();
        true
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Country => &self.country,
            Field::PropertyType => &self.property_type,
            Field::Message => &self.message,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, &self.variant) {
            (true, _) => PENDING_LABEL,
            (false, FormVariant::Page) => "Send Enquiry",
            (false, FormVariant::Modal { .. }) => "Request Details",
        }
    }

    fn required_filled(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.email.is_empty()
    }

    fn to_submission(&self) -> LeadSubmission {
        let (country, property_type, property_interest) = match &self.variant {
            FormVariant::Page => (
                Some(PAGE_COUNTRY.to_string()),
                Some(PAGE_PROPERTY_TYPE.to_string()),
                None,
            ),
            FormVariant::Modal { property_interest } => (
                non_empty(&self.country),
                non_empty(&self.property_type),
                non_empty(property_interest),
            ),
        };

        LeadSubmission {
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            country,
            property_type,
            property_interest,
            message: non_empty(&self.message),
        }
    }

    /// Enter the pending state and build the submission.
    ///
    /// Returns `None` while a submission is already pending, or when a
    /// required input is empty (the browser's `required` check).
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.submitting {
            tracing::debug!("Submit ignored: request already pending");
            return None;
        }
        if !self.required_filled() {
            tracing::debug!("Submit blocked: required field empty");
            return None;
        }

        self.submitting = true;
        self.status = SubmitStatus::Pending;
        Some(self.to_submission())
    }

    /// Apply the outcome of a pending submission.
    ///
    /// Success clears every input; failure keeps them for resubmission.
    /// The submit control is re-enabled either way. Returns the delay after
    /// which a modal should close itself, on success only.
    pub fn finish_submit(
        &mut self,
        outcome: &Result<ContactSuccess, FormError>,
    ) -> Option<Duration> {
        self.submitting = false;

        match outcome {
            Ok(_) => {
                self.status = SubmitStatus::Success;
                self.name.clear();
                self.phone.clear();
                self.email.clear();
                self.country.clear();
                self.property_type.clear();
                self.message.clear();
                match self.variant {
                    FormVariant::Modal { .. } => Some(self.close_delay),
                    FormVariant::Page => None,
                }
            }
            Err(e) => {
                tracing::warn!("Lead form submission failed: {}", e);
                self.status = SubmitStatus::Error;
                None
            }
        }
    }

    /// Full round trip: pending, POST, outcome.
    ///
    /// A modal that succeeded keeps its success banner for the close delay,
    /// then closes before this returns. A refused start leaves the status
    /// untouched and returns it.
    pub async fn submit(&mut self, client: &ContactClient) -> SubmitStatus {
        let Some(submission) = self.begin_submit() else {
            return self.status;
        };

        let outcome = client.send(&submission).await;
        if let Some(delay) = self.finish_submit(&outcome) {
            tracing::debug!("Modal will close in {:?}", delay);
            tokio::time::sleep(delay).await;
            self.close();
        }
        self.status
    }
}
