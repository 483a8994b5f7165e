//! Session statistics.
//!
//! Plain counters over the engine's inbound and outbound traffic, logged
//! as a summary on demand and at shutdown.

use chrono::{DateTime, Utc};
use tracing::info;

/// Counters for one trading session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    started_at: DateTime<Utc>,
    pub book_updates: u64,
    pub trade_ticks: u64,
    pub fills: u64,
    pub hedge_fills: u64,
    pub errors: u64,
    pub inserts: u64,
    pub cancels: u64,
    pub hedges: u64,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            book_updates: 0,
            trade_ticks: 0,
            fills: 0,
            hedge_fills: 0,
            errors: 0,
            inserts: 0,
            cancels: 0,
            hedges: 0,
        }
    }

    /// Total outbound commands emitted.
    #[must_use]
    pub fn commands(&self) -> u64 {
        self.inserts + self.cancels + self.hedges
    }

    /// Log a one-line session summary.
    pub fn log_summary(&self) {
        let uptime_secs = (Utc::now() - self.started_at).num_seconds();
        info!(
            uptime_secs,
            book_updates = self.book_updates,
            trade_ticks = self.trade_ticks,
            fills = self.fills,
            hedge_fills = self.hedge_fills,
            errors = self.errors,
            inserts = self.inserts,
            cancels = self.cancels,
            hedges = self.hedges,
            "Session summary"
        );
    }
}
