//! Target price derivation.
//!
//! Quotes are priced off the reference (hedge) instrument's ladder at a
//! fixed depth behind the top of book. A zero price means "do not quote".

use pairmm_core::Price;
use pairmm_feed::DepthSnapshot;

use crate::config::MakerConfig;

/// Target prices for one reconciliation cycle. Zero on a side means the
/// reference book offers no liquidity there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePrices {
    pub bid: Price,
    pub ask: Price,
}

impl QuotePrices {
    /// Targets that quote nothing on either side.
    #[must_use]
    pub fn withdrawn() -> Self {
        Self {
            bid: Price::ZERO,
            ask: Price::ZERO,
        }
    }
}

/// Derives target prices from the reference instrument's depth ladder.
#[derive(Debug)]
pub struct QuotingStrategy {
    /// 1-indexed ladder depth; validated to `1..=DEPTH` at config load.
    depth: usize,
}

impl QuotingStrategy {
    #[must_use]
    pub fn new(config: &MakerConfig) -> Self {
        Self {
            depth: config.quote_depth,
        }
    }

    /// Pick the price at the configured depth on each side.
    ///
    /// A side with a zero best price yields a zero target; no reference
    /// snapshot at all yields zero on both sides.
    #[must_use]
    pub fn target_prices(&self, reference: Option<&DepthSnapshot>) -> QuotePrices {
        let Some(book) = reference else {
            return QuotePrices::withdrawn();
        };

        let bid = if book.has_bids() {
            book.bids[self.depth - 1].price
        } else {
            Price::ZERO
        };
        let ask = if book.has_asks() {
            book.asks[self.depth - 1].price
        } else {
            Price::ZERO
        };

        QuotePrices { bid, ask }
    }
}
