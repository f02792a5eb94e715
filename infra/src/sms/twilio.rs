//! Twilio SMS sender
//!
//! Production dispatch through the Twilio API with retry on transient
//! failures. Destination numbers are masked in every log line.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use otp_core::services::otp::SmsSender;
use otp_shared::utils::phone::{is_valid_phone_number, mask_phone};

use crate::InfrastructureError;

/// Twilio sender configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio number, E.164)
    pub from_number: String,
    /// Maximum attempts per message
    pub max_retries: u32,
    /// Initial delay between retries; doubles per attempt
    pub retry_delay_ms: u64,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

/// Twilio-backed SMS sender
pub struct TwilioSmsSender {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    /// Create a new sender, validating the configuration first
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio credentials not configured".to_string(),
            ));
        }
        if !is_valid_phone_number(&config.from_number) {
            return Err(InfrastructureError::Config(
                "Twilio from number must be in E.164 format".to_string(),
            ));
        }

        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone(&config.from_number),
            "Twilio SMS sender initialized"
        );

        Ok(Self { client, config })
    }

    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let mut last_error = String::new();

        for attempt in 1..=self.config.max_retries {
            debug!(
                destination = %mask_phone(to),
                attempt = attempt,
                max_attempts = self.config.max_retries,
                "Dispatching SMS via Twilio"
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);

            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        destination = %mask_phone(to),
                        sid = %response.sid,
                        "Twilio SMS dispatched"
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    error!(
                        destination = %mask_phone(to),
                        attempt = attempt,
                        error = %e,
                        "Twilio dispatch attempt failed"
                    );
                    last_error = e.to_string();

                    if attempt < self.config.max_retries {
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(InfrastructureError::Sms(format!(
            "Twilio dispatch failed after {} attempts: {}",
            self.config.max_retries, last_error
        )))
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        self.send_with_retry(to, message)
            .await
            .map_err(|e| e.to_string())
    }
}
