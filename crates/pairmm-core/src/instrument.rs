//! Instrument universe.
//!
//! The engine trades exactly two correlated legs: a future used as the
//! pricing reference and hedge vehicle, and the ETF in which quotes rest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two instruments known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    /// Hedge leg; its depth ladder is the pricing reference.
    Future,
    /// Tradable leg in which resting quotes are placed.
    Etf,
}

impl Instrument {
    /// Number of instruments, for fixed-size per-instrument tables.
    pub const COUNT: usize = 2;

    /// Stable index for per-instrument tables.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Future => 0,
            Self::Etf => 1,
        }
    }

    /// Whether resting quotes are placed in this instrument.
    #[inline]
    pub fn is_tradable(&self) -> bool {
        matches!(self, Self::Etf)
    }

    /// Whether this instrument is the hedge/pricing-reference leg.
    #[inline]
    pub fn is_hedge(&self) -> bool {
        matches!(self, Self::Future)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Future => write!(f, "future"),
            Self::Etf => write!(f, "etf"),
        }
    }
}
