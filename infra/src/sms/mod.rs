//! SMS sender implementations
//!
//! - `MockSmsSender` - console/log output for development and tests
//! - `TwilioSmsSender` - production dispatch via the Twilio API,
//!   behind the `twilio-sms` feature
//!
//! `create_sms_sender` picks the implementation from configuration and
//! falls back to the mock when a provider cannot be initialized.

pub mod mock;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use mock::MockSmsSender;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsSender};

use async_trait::async_trait;
use tracing::{error, warn};

use otp_core::services::otp::SmsSender;
use otp_shared::config::SmsConfig;

/// Sender handle dispatching to the configured provider
pub enum SenderHandle {
    Mock(MockSmsSender),
    #[cfg(feature = "twilio-sms")]
    Twilio(TwilioSmsSender),
}

#[async_trait]
impl SmsSender for SenderHandle {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        match self {
            SenderHandle::Mock(s) => s.send_sms(to, message).await,
            #[cfg(feature = "twilio-sms")]
            SenderHandle::Twilio(s) => s.send_sms(to, message).await,
        }
    }
}

/// Create an SMS sender based on configuration
pub fn create_sms_sender(config: &SmsConfig) -> SenderHandle {
    match config.provider.as_str() {
        "mock" => SenderHandle::Mock(MockSmsSender::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig {
                account_sid: config.account_sid.clone(),
                auth_token: config.auth_token.clone(),
                from_number: config.from_number.clone(),
                ..TwilioConfig::default()
            };

            match TwilioSmsSender::new(twilio_config) {
                Ok(sender) => SenderHandle::Twilio(sender),
                Err(e) => {
                    error!("Failed to initialize Twilio SMS sender: {}", e);
                    warn!("Falling back to mock SMS sender");
                    SenderHandle::Mock(MockSmsSender::new())
                }
            }
        }
        other => {
            warn!("Unknown SMS provider '{}', using mock sender", other);
            SenderHandle::Mock(MockSmsSender::new())
        }
    }
}
