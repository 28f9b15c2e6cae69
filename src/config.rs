use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

/// Default outbound relay endpoint (Web3Forms-compatible submit API).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Default sender label shown on relayed emails.
pub const DEFAULT_FROM_NAME: &str = "Rishi Malik Website";
/// Asia/Dubai, which has no daylight saving.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 240;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub relay_endpoint: String,
    pub relay_access_key: String,
    pub recipient_email: String,
    pub from_name: String,
    pub utc_offset_minutes: i32,
    pub forward_message: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Log successful configuration load (without the access key)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Relay endpoint: {}", config.relay_endpoint);
        tracing::debug!("Sender label: {}", config.from_name);
        tracing::debug!("Lead recipient: {}", config.recipient_email);
        tracing::debug!("Timestamp offset: {} minutes", config.utc_offset_minutes);
        if config.forward_message {
            tracing::info!("Free-text requirement will be forwarded in relayed emails");
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relay_endpoint = lookup("RELAY_ENDPOINT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string());
        let parsed = url::Url::parse(&relay_endpoint)
            .map_err(|e| anyhow::anyhow!("RELAY_ENDPOINT is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("RELAY_ENDPOINT must start with http:// or https://");
        }

        let config = Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            relay_endpoint,
            relay_access_key: lookup("RELAY_ACCESS_KEY")
                .ok_or_else(|| anyhow::anyhow!("RELAY_ACCESS_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("RELAY_ACCESS_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            recipient_email: lookup("LEAD_RECIPIENT_EMAIL")
                .ok_or_else(|| {
                    anyhow::anyhow!("LEAD_RECIPIENT_EMAIL environment variable required")
                })
                .and_then(|email| {
                    let email = email.trim().to_string();
                    if email.is_empty() {
                        anyhow::bail!("LEAD_RECIPIENT_EMAIL cannot be empty");
                    }
                    if !email.contains('@') {
                        anyhow::bail!("LEAD_RECIPIENT_EMAIL must be an email address");
                    }
                    Ok(email)
                })?,
            from_name: lookup("LEAD_FROM_NAME")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            utc_offset_minutes: match lookup("LEAD_UTC_OFFSET_MINUTES") {
                Some(raw) => {
                    let minutes: i32 = raw.trim().parse().map_err(|_| {
                        anyhow::anyhow!("LEAD_UTC_OFFSET_MINUTES must be a whole number")
                    })?;
                    if minutes.checked_mul(60).and_then(FixedOffset::east_opt).is_none() {
                        anyhow::bail!("LEAD_UTC_OFFSET_MINUTES must be within +/-24 hours");
                    }
                    minutes
                }
                None => DEFAULT_UTC_OFFSET_MINUTES,
            },
            forward_message: match lookup("LEAD_FORWARD_MESSAGE") {
                Some(raw) => parse_flag(&raw).ok_or_else(|| {
                    anyhow::anyhow!("LEAD_FORWARD_MESSAGE must be true/false, 1/0 or yes/no")
                })?,
                None => false,
            },
        };

        Ok(config)
    }

    /// Fixed time zone used for the "Submitted at" timestamp.
    pub fn submission_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
