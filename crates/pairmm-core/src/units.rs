//! Integral price and volume newtypes.
//!
//! The host protocol expresses prices in integral cents and volumes in
//! integral lots. Wrapping them keeps prices and volumes from being mixed
//! in calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Lowest price the host protocol can represent, in cents.
pub const MINIMUM_BID: Price = Price(1);

/// Highest price the host protocol can represent, in cents.
pub const MAXIMUM_ASK: Price = Price(2_147_483_647);

/// Limit price in cents.
///
/// Zero carries protocol meaning: an empty book level, or a target that
/// must not be quoted. See `PriceIntent` in `pairmm-mm` for the explicit
/// disambiguation at the reconciliation seam.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    #[inline]
    pub fn inner(&self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Round down to the nearest multiple of `tick`.
    #[inline]
    pub fn round_down_to_tick(&self, tick: i64) -> Self {
        if tick <= 0 {
            return *self;
        }
        Self(self.0 / tick * tick)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Order volume in whole lots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Volume(pub i64);

impl Volume {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub fn new(lots: i64) -> Self {
        Self(lots)
    }

    #[inline]
    pub fn inner(&self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Volume {
    fn from(lots: i64) -> Self {
        Self(lots)
    }
}

impl Add for Volume {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Volume {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Volume {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
