/// Lead validation and relay message composition
///
/// Turns a raw `LeadSubmission` into the payload the email relay expects:
/// 1. Reject submissions without name, phone or email
/// 2. Resolve optional fields to their fallback text
/// 3. Compose the plain-text body with a localized timestamp
/// 4. Assemble the outbound `RelayPayload`
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LeadSubmission, RelayPayload, ValidatedLead};
use chrono::{DateTime, FixedOffset, Utc};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const DEFAULT_PROPERTY_INTEREST: &str = "General Inquiry";
pub const DEFAULT_COUNTRY: &str = "Not provided";
pub const DEFAULT_PROPERTY_TYPE: &str = "Not specified";

/// Absent, null and empty strings all count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate a submission and resolve its fallbacks.
///
/// Only emptiness is checked; the email address is passed through as typed.
pub fn validate_submission(submission: LeadSubmission) -> Result<ValidatedLead, AppError> {
    let (name, phone, email) = match (
        present(submission.name),
        present(submission.phone),
        present(submission.email),
    ) {
        (Some(name), Some(phone), Some(email)) => (name, phone, email),
        _ => return Err(AppError::BadRequest(MISSING_FIELDS.to_string())),
    };

    Ok(ValidatedLead {
        name,
        phone,
        email,
        country: present(submission.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        property_type: present(submission.property_type)
            .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_string()),
        property_interest: present(submission.property_interest)
            .unwrap_or_else(|| DEFAULT_PROPERTY_INTEREST.to_string()),
        message: present(submission.message),
    })
}

/// Format the submission time the way the en-AE locale prints it,
/// e.g. `19/10/2026, 3:45:12 PM`.
pub fn format_submitted_at(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset)
        .format("%d/%m/%Y, %-I:%M:%S %p")
        .to_string()
}

pub fn compose_subject(lead: &ValidatedLead) -> String {
    format!("New Property Inquiry: {}", lead.property_interest)
}

/// Compose the plain-text email body.
///
/// The free-text requirement is only included when `forward_message` is set.
pub fn compose_message(
    lead: &ValidatedLead,
    from_name: &str,
    submitted_at: &str,
    forward_message: bool,
) -> String {
    let mut message = String::new();

    message.push_str(&format!("New Property Inquiry from {}\n\n", from_name));
    message.push_str(&format!(
        "Property of Interest: {}\n\n",
        lead.property_interest
    ));

    message.push_str("Contact Details:\n");
    message.push_str(&format!("- Name: {}\n", lead.name));
    message.push_str(&format!("- Phone/WhatsApp: {}\n", lead.phone));
    message.push_str(&format!("- Email: {}\n", lead.email));
    message.push_str(&format!("- Country: {}\n", lead.country));
    message.push_str(&format!("- Property Type: {}\n", lead.property_type));

    if forward_message {
        if let Some(requirement) = &lead.message {
            message.push_str("\nRequirement:\n");
            message.push_str(requirement.trim());
            message.push('\n');
        }
    }

    message.push_str(&format!("\nSubmitted at: {}", submitted_at));

    message.trim().to_string()
}

/// Assemble the outbound payload for one lead.
pub fn build_relay_payload(
    lead: &ValidatedLead,
    config: &Config,
    now: DateTime<Utc>,
) -> RelayPayload {
    let submitted_at = format_submitted_at(now, config.submission_offset());

    RelayPayload {
        access_key: config.relay_access_key.clone(),
        subject: compose_subject(lead),
        from_name: config.from_name.clone(),
        to_email: config.recipient_email.clone(),
        replyto: lead.email.clone(),
        message: compose_message(lead, &config.from_name, &submitted_at, config.forward_message),
        name: lead.name.clone(),
        email: lead.email.clone(),
    }
}
