//! Net position tracking.
//!
//! A single signed lot count for the tradable instrument, mutated only by
//! execution events on the engine's own orders.

use tracing::warn;

use pairmm_core::{Side, Volume};

/// Signed net inventory in lots, bounded by the configured limit.
#[derive(Debug)]
pub struct Inventory {
    position: i64,
    limit: i64,
}

impl Inventory {
    #[must_use]
    pub fn new(limit: i64) -> Self {
        Self { position: 0, limit }
    }

    /// Current net position (positive = long).
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Configured position limit.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Apply a fill: buys increase position, sells decrease it.
    pub fn apply_fill(&mut self, side: Side, volume: Volume) {
        self.position += side.sign() * volume.inner();
        if self.position.abs() > self.limit {
            // Sizing keeps fills inside the limit; reaching here means the
            // host reported volume the engine never quoted.
            warn!(
                position = self.position,
                limit = self.limit,
                "Position outside configured limit"
            );
        }
    }

    /// Whether a new resting order on `side` is allowed at all.
    ///
    /// Matches the insert gate: bids require `position < limit`, asks
    /// require `position > -limit`.
    #[must_use]
    pub fn has_headroom(&self, side: Side) -> bool {
        match side {
            Side::Buy => self.position < self.limit,
            Side::Sell => self.position > -self.limit,
        }
    }
}
