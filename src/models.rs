use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Lead submitted by the contact form (`POST /api/contact`).
///
/// Every field is optional at the wire level so that a missing required
/// field surfaces as a 400 from validation rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    /// Full name (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    /// Phone or WhatsApp number (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "+971500000000")]
    pub phone: Option<String>,

    /// Email address (required, format not checked).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    /// Listing the lead asked about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_interest: Option<String>,

    /// Free-text requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A submission whose required fields are present and whose optional
/// fields have been resolved to their fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLead {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub property_type: String,
    pub property_interest: String,
    pub message: Option<String>,
}

/// Payload sent to the email relay API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub to_email: String,
    pub replyto: String,
    pub message: String,
    pub name: String,
    pub email: String,
}

/// What the relay answered: HTTP status plus its decoded JSON body.
#[derive(Debug, Clone)]
pub struct RelayReceipt {
    pub status: u16,
    pub body: Value,
}

impl RelayReceipt {
    /// Accepted only when the transport status is 2xx and the body says so.
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status)
            && self
                .body
                .get("success")
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
    }
}

/// Success response of the contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSuccess {
    pub success: bool,
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Error response of the contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Upstream relay body, present on relay failures only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
    /// Upstream HTTP status when it was not 2xx.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
