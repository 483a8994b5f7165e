//! Order lifecycle and outbound command types.
//!
//! `TrackedOrder` follows an order from submission to completion;
//! `OrderCommand` is the fire-and-forget outbound contract handed to the
//! transport collaborator.

use serde::{Deserialize, Serialize};

use crate::order::{Lifespan, OrderId, Side, StrategyId};
use crate::units::{Price, Volume};

/// State of an order in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Insert command emitted, not yet acknowledged by the host.
    #[default]
    Pending,
    /// Confirmed resting in the book with volume remaining.
    Resting,
    /// Some volume traded, some still resting.
    PartiallyFilled,
    /// Zero remaining volume: fully filled, cancelled, or rejected.
    Done,
}

impl OrderStatus {
    /// Returns true if the order can still trade.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Done)
    }

    /// Returns true if the order has reached its terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// An order owned by a strategy slot, tracked from insert to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedOrder {
    /// Engine-assigned order id.
    pub id: OrderId,
    /// Strategy that owns the order.
    pub strategy: StrategyId,
    /// Order side.
    pub side: Side,
    /// Limit price.
    pub price: Price,
    /// Submitted size.
    pub size: Volume,
    /// Volume traded so far.
    pub filled: Volume,
    /// Current lifecycle state.
    pub status: OrderStatus,
}

impl TrackedOrder {
    /// Create a freshly submitted order in `Pending` state.
    #[must_use]
    pub fn new(id: OrderId, strategy: StrategyId, side: Side, price: Price, size: Volume) -> Self {
        Self {
            id,
            strategy,
            side,
            price,
            size,
            filled: Volume::ZERO,
            status: OrderStatus::Pending,
        }
    }

    /// Volume not yet traded (by the engine's own accounting; the host's
    /// remaining-volume report is authoritative).
    #[must_use]
    pub fn unfilled(&self) -> Volume {
        self.size - self.filled
    }
}

/// Outbound command for the transport collaborator.
///
/// Every command is one-way fire-and-forget; the engine never blocks on an
/// acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum OrderCommand {
    /// Place a new resting order in the tradable instrument.
    Insert {
        id: OrderId,
        side: Side,
        price: Price,
        volume: Volume,
        lifespan: Lifespan,
    },
    /// Cancel a resting order.
    Cancel { id: OrderId },
    /// Place a marketable hedge order in the hedge instrument.
    Hedge {
        id: OrderId,
        side: Side,
        price: Price,
        volume: Volume,
    },
}

impl OrderCommand {
    /// Id of the order this command refers to.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Insert { id, .. } | Self::Cancel { id } | Self::Hedge { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    #[must_use]
    pub fn is_cancel(&self) -> bool {
        matches!(self, Self::Cancel { .. })
    }

    #[must_use]
    pub fn is_hedge(&self) -> bool {
        matches!(self, Self::Hedge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> TrackedOrder {
        TrackedOrder::new(
            OrderId::new(7),
            StrategyId::EtfSpread,
            Side::Buy,
            Price::new(10_000),
            Volume::new(40),
        )
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = sample_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.filled, Volume::ZERO);
        assert_eq!(order.unfilled(), Volume::new(40));
    }

    #[test]
    fn test_status_liveness() {
        assert!(OrderStatus::Pending.is_live());
        assert!(OrderStatus::Resting.is_live());
        assert!(OrderStatus::PartiallyFilled.is_live());
        assert!(OrderStatus::Done.is_terminal());
        assert!(!OrderStatus::Done.is_live());
    }

    #[test]
    fn test_command_accessors() {
        let insert = OrderCommand::Insert {
            id: OrderId::new(1),
            side: Side::Sell,
            price: Price::new(10_100),
            volume: Volume::new(40),
            lifespan: Lifespan::GoodForDay,
        };
        assert!(insert.is_insert());
        assert_eq!(insert.order_id(), OrderId::new(1));

        let cancel = OrderCommand::Cancel { id: OrderId::new(2) };
        assert!(cancel.is_cancel());
        assert_eq!(cancel.order_id(), OrderId::new(2));
    }
}
