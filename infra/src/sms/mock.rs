//! Mock SMS sender
//!
//! Logs messages instead of sending them. The default sender in
//! development, and the fallback when a real provider cannot be set up.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::services::otp::SmsSender;
use otp_shared::utils::phone::mask_phone;

/// Console-output SMS sender
#[derive(Clone)]
pub struct MockSmsSender {
    /// Running count of dispatched messages
    message_count: Arc<AtomicU64>,
    /// Whether every send should fail (for testing)
    simulate_failure: bool,
    /// Whether to print message bodies to stdout
    console_output: bool,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a sender with configurable behavior
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Total messages dispatched through this sender
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                destination = %mask_phone(to),
                "Mock SMS sender simulating dispatch failure"
            );
            return Err("Simulated SMS dispatch failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("--- MOCK SMS #{} ---", count);
            println!("To: {}", to);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("--------------------");
        }

        info!(
            provider = "mock",
            destination = %mask_phone(to),
            message_id = %message_id,
            "Mock SMS dispatched"
        );

        Ok(message_id)
    }
}
