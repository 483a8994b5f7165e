//! Position-aware order sizing.
//!
//! Target sizes come from a logistic damping curve over current inventory,
//! biased toward unwinding whatever net position exists, then hard-clamped
//! so a full fill can never breach the position limit.

use pairmm_core::Volume;

use crate::config::MakerConfig;

/// Target quote sizes for one reconciliation cycle. Zero means "do not
/// quote that side this cycle".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePair {
    pub bid: Volume,
    pub ask: Volume,
}

/// Converts net position into bid/ask target sizes.
#[derive(Debug)]
pub struct SizingEngine {
    lot_size: i64,
    position_limit: i64,
    unwind_extra: i64,
    steepness: f64,
}

impl SizingEngine {
    #[must_use]
    pub fn new(config: &MakerConfig) -> Self {
        Self {
            lot_size: config.lot_size,
            position_limit: config.position_limit,
            unwind_extra: config.unwind_extra(),
            steepness: config.sigmoid_steepness(),
        }
    }

    /// Damping factor in (0, 1); decreases as position grows long, so the
    /// bid shrinks when long and the ask shrinks when short.
    fn damping(&self, position: i64) -> f64 {
        let x = position as f64 / (2.0 * self.position_limit as f64);
        1.0 / (1.0 + (self.steepness * x).exp())
    }

    /// Compute target sizes for the given net position.
    #[must_use]
    pub fn target_sizes(&self, position: i64) -> SizePair {
        let f = self.damping(position);
        let mut bid = (f * self.lot_size as f64).floor() as i64;
        let mut ask = ((1.0 - f) * self.lot_size as f64).floor() as i64;

        // Unwind bias: both overrides apply at exactly zero.
        if position >= 0 {
            ask = position.abs() + self.unwind_extra;
        }
        if position <= 0 {
            bid = position.abs() + self.unwind_extra;
        }

        // Hard clamp: a full fill must leave position strictly inside the
        // limit. The unwind side only ever reduces risk, so it is clamped
        // against the opposite bound only.
        if position + bid >= self.position_limit {
            bid = self.position_limit - position - 1;
        }
        if position - ask <= -self.position_limit {
            ask = self.position_limit + position - 1;
        }

        SizePair {
            bid: Volume::new(bid.max(0)),
            ask: Volume::new(ask.max(0)),
        }
    }
}
