//! Periodic cleanup of expired pending entries
//!
//! Entries are also purged lazily when a verify touches them, but a
//! store holding codes that are never verified would otherwise grow
//! without bound. Stores with native TTL (Redis) make each sweep a
//! no-op.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use super::traits::OtpStore;

/// Configuration for the store sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// Seconds between sweeps
    pub interval_seconds: u64,
    /// Whether the sweeper runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

/// Background task that periodically drops expired entries
pub struct StoreSweeper<T: OtpStore + 'static> {
    store: Arc<T>,
    config: SweeperConfig,
}

impl<T: OtpStore> StoreSweeper<T> {
    /// Create a new sweeper over a store
    pub fn new(store: Arc<T>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle, returning how many entries were purged
    pub async fn run_once(&self) -> Result<u64, String> {
        let purged = self.store.purge_expired().await?;
        if purged > 0 {
            info!(purged = purged, "Purged expired pending verifications");
        }
        Ok(purged)
    }

    /// Run the sweep loop forever. Intended to be spawned as a task.
    pub async fn run(self) {
        if !self.config.enabled {
            info!("Store sweeper disabled");
            return;
        }

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_seconds));
        // The first tick fires immediately; skip it so startup stays quiet.
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(e) = self.run_once().await {
                error!(error = %e, "Expired-entry sweep failed");
            }
        }
    }
}
