//! Order identity types.
//!
//! Provides order side, lifespan, strategy and order identifiers for the
//! quoting engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns 1 for buy, -1 for sell (for position calculations).
    pub fn sign(&self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Time-in-force for resting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifespan {
    /// Rests in the book for the remainder of the trading session.
    #[default]
    GoodForDay,
    /// Executes immediately against resting volume or dies.
    FillAndKill,
}

impl fmt::Display for Lifespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodForDay => write!(f, "good_for_day"),
            Self::FillAndKill => write!(f, "fill_and_kill"),
        }
    }
}

/// Order identifier.
///
/// Assigned by the engine as a monotonically increasing integer, never
/// reused within a session. Zero is the host protocol's "no specific
/// order" sentinel and is never allocated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether this is the protocol's "no specific order" sentinel.
    #[inline]
    pub fn is_none_sentinel(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Known quoting strategies.
///
/// Strategies index a fixed-size slot table in the ledger, so adding one
/// means adding a variant here rather than a dynamic dictionary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    /// Quotes the ETF off the future's depth ladder.
    EtfSpread,
}

impl StrategyId {
    /// Number of known strategies, for fixed-size slot tables.
    pub const COUNT: usize = 1;

    /// Stable index into per-strategy tables.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::EtfSpread => 0,
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EtfSpread => write!(f, "etf_spread"),
        }
    }
}
