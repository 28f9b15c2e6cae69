use crate::config::Config;
use crate::errors::AppError;
use crate::models::{RelayPayload, RelayReceipt};
use serde_json::Value;

/// Client for the third-party email relay (Web3Forms-compatible).
///
/// One best-effort POST per lead: no retry, no timeout beyond the
/// client default.
#[derive(Clone)]
pub struct EmailRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailRelayClient {
    /// Creates a new `EmailRelayClient`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the relay's submit API.
    pub fn new(endpoint: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create relay client: {}", e))
            })?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client for the endpoint named in the configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.relay_endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one lead to the relay.
    ///
    /// Returns the receipt whatever the upstream status was; callers decide
    /// acceptance with [`RelayReceipt::is_accepted`]. Transport failures and
    /// non-JSON bodies are `InternalError`.
    ///
    /// # Arguments
    ///
    /// * `payload` - The composed relay payload.
    ///
    /// # Returns
    ///
    /// * `Result<RelayReceipt, AppError>` - Upstream status and JSON body.
    pub async fn submit(&self, payload: &RelayPayload) -> Result<RelayReceipt, AppError> {
        tracing::info!(
            "Relaying lead to {} (subject: {})",
            self.endpoint,
            payload.subject
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("Relay request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::InternalError(format!("Failed to read relay response: {}", e))
        })?;

        tracing::info!("Relay responded with status {}", status);
        tracing::debug!("Relay response body: {}", text);

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            AppError::InternalError(format!(
                "Relay returned non-JSON body ({}): {}",
                status, e
            ))
        })?;

        Ok(RelayReceipt {
            status: status.as_u16(),
            body,
        })
    }

    /// Sends one lead and maps the receipt to the relay outcome.
    ///
    /// # Returns
    ///
    /// * `Ok(receipt)` - The relay accepted the lead.
    /// * `Err(AppError::RelayRejected)` - The relay answered but refused it.
    /// * `Err(AppError::InternalError)` - Transport or decoding failure.
    pub async fn deliver(&self, payload: &RelayPayload) -> Result<RelayReceipt, AppError> {
        let receipt = self.submit(payload).await?;

        if receipt.is_accepted() {
            tracing::info!("✓ Lead accepted by email relay");
            return Ok(receipt);
        }

        let status = (!(200..300).contains(&receipt.status)).then_some(receipt.status);
        Err(AppError::RelayRejected {
            status,
            details: receipt.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = EmailRelayClient::new("https://example.com/submit".to_string());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().endpoint(), "https://example.com/submit");
    }
}
