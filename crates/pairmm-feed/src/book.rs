//! Depth snapshot storage.
//!
//! Keeps the latest five-level ladder per instrument. Snapshots are
//! replaced wholesale on every update; a stale or duplicate sequence
//! number is accepted and simply overwrites (at-least-once, latest-wins).

use chrono::{DateTime, Utc};
use tracing::debug;

use pairmm_core::{Instrument, Price, Volume};

/// Ladder depth reported by the host on each side.
pub const DEPTH: usize = 5;

/// One (price, volume) rung of a ladder. A zero price means "no quote at
/// this depth".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Level {
    pub price: Price,
    pub volume: Volume,
}

/// Full depth snapshot for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DepthSnapshot {
    /// Host sequence number, monotonically non-decreasing when the
    /// transport behaves; stored verbatim either way.
    pub sequence: u64,
    /// Bid ladder, best (highest) first.
    pub bids: [Level; DEPTH],
    /// Ask ladder, best (lowest) first.
    pub asks: [Level; DEPTH],
}

impl DepthSnapshot {
    /// Assemble a snapshot from the host callback's parallel arrays.
    #[must_use]
    pub fn from_arrays(
        sequence: u64,
        ask_prices: &[Price; DEPTH],
        ask_volumes: &[Volume; DEPTH],
        bid_prices: &[Price; DEPTH],
        bid_volumes: &[Volume; DEPTH],
    ) -> Self {
        let mut bids = [Level::default(); DEPTH];
        let mut asks = [Level::default(); DEPTH];
        for i in 0..DEPTH {
            bids[i] = Level {
                price: bid_prices[i],
                volume: bid_volumes[i],
            };
            asks[i] = Level {
                price: ask_prices[i],
                volume: ask_volumes[i],
            };
        }
        Self {
            sequence,
            bids,
            asks,
        }
    }

    /// Whether any bid liquidity is present (best bid price non-zero).
    #[must_use]
    pub fn has_bids(&self) -> bool {
        !self.bids[0].price.is_zero()
    }

    /// Whether any ask liquidity is present (best ask price non-zero).
    #[must_use]
    pub fn has_asks(&self) -> bool {
        !self.asks[0].price.is_zero()
    }

    /// Best bid level.
    #[must_use]
    pub fn best_bid(&self) -> Level {
        self.bids[0]
    }

    /// Best ask level.
    #[must_use]
    pub fn best_ask(&self) -> Level {
        self.asks[0]
    }
}

#[derive(Debug, Clone)]
struct BookEntry {
    snapshot: DepthSnapshot,
    received_at: DateTime<Utc>,
}

/// Latest depth snapshot per instrument.
///
/// Owned by the single-threaded engine; no interior locking.
#[derive(Debug, Default)]
pub struct OrderBookStore {
    books: [Option<BookEntry>; Instrument::COUNT],
}

impl OrderBookStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot for `instrument` unconditionally.
    pub fn update(
        &mut self,
        instrument: Instrument,
        sequence: u64,
        ask_prices: &[Price; DEPTH],
        ask_volumes: &[Volume; DEPTH],
        bid_prices: &[Price; DEPTH],
        bid_volumes: &[Volume; DEPTH],
    ) {
        let entry = &mut self.books[instrument.index()];
        if let Some(existing) = entry {
            if sequence < existing.snapshot.sequence {
                debug!(
                    %instrument,
                    stored = existing.snapshot.sequence,
                    received = sequence,
                    "Sequence regression in order book update, overwriting"
                );
            }
        }
        *entry = Some(BookEntry {
            snapshot: DepthSnapshot::from_arrays(
                sequence,
                ask_prices,
                ask_volumes,
                bid_prices,
                bid_volumes,
            ),
            received_at: Utc::now(),
        });
    }

    /// Latest snapshot for `instrument`, if one has arrived.
    #[must_use]
    pub fn snapshot(&self, instrument: Instrument) -> Option<&DepthSnapshot> {
        self.books[instrument.index()]
            .as_ref()
            .map(|entry| &entry.snapshot)
    }

    /// Receive time of the latest snapshot.
    #[must_use]
    pub fn last_update(&self, instrument: Instrument) -> Option<DateTime<Utc>> {
        self.books[instrument.index()]
            .as_ref()
            .map(|entry| entry.received_at)
    }

    /// Whether any snapshot has arrived for `instrument`.
    #[must_use]
    pub fn has_snapshot(&self, instrument: Instrument) -> bool {
        self.books[instrument.index()].is_some()
    }
}
