//! Outstanding order bookkeeping.
//!
//! The ledger owns order identity: a fixed slot table with at most one
//! resting order per (strategy, side), the live bid/ask id sets, and the
//! per-order lifecycle records. Ids are monotonically increasing and never
//! reused.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use pairmm_core::{OrderId, OrderStatus, Side, StrategyId, TrackedOrder, Volume};

/// The order currently occupying a strategy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOrder {
    pub id: OrderId,
    pub price: pairmm_core::Price,
}

#[derive(Debug, Default)]
struct StrategySlots {
    bid: Option<SlotOrder>,
    ask: Option<SlotOrder>,
}

impl StrategySlots {
    fn side(&self, side: Side) -> &Option<SlotOrder> {
        match side {
            Side::Buy => &self.bid,
            Side::Sell => &self.ask,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Option<SlotOrder> {
        match side {
            Side::Buy => &mut self.bid,
            Side::Sell => &mut self.ask,
        }
    }
}

/// Tracks outstanding orders and enforces one resting order per
/// (strategy, side).
#[derive(Debug)]
pub struct OrderLedger {
    slots: [StrategySlots; StrategyId::COUNT],
    live_bids: HashSet<OrderId>,
    live_asks: HashSet<OrderId>,
    orders: HashMap<OrderId, TrackedOrder>,
    next_id: u64,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            live_bids: HashSet::new(),
            live_asks: HashSet::new(),
            orders: HashMap::new(),
            // Zero is the host's "no specific order" sentinel.
            next_id: 1,
        }
    }

    /// Allocate the next order id. Ids are shared between quotes and
    /// hedges and never reused.
    pub fn allocate_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Slot contents for a strategy side.
    #[must_use]
    pub fn slot(&self, strategy: StrategyId, side: Side) -> Option<SlotOrder> {
        *self.slots[strategy.index()].side(side)
    }

    /// Empty a slot without touching the live id sets. Used when a cancel
    /// is emitted: the order may still fill before the cancel lands, so it
    /// stays in the sets until the host reports zero remaining volume.
    pub fn clear_slot(&mut self, strategy: StrategyId, side: Side) {
        *self.slots[strategy.index()].side_mut(side) = None;
    }

    /// Record a freshly inserted order: occupies its slot and joins the
    /// live set for its side.
    pub fn record_insert(&mut self, order: TrackedOrder) {
        let slot = SlotOrder {
            id: order.id,
            price: order.price,
        };
        *self.slots[order.strategy.index()].side_mut(order.side) = Some(slot);
        match order.side {
            Side::Buy => self.live_bids.insert(order.id),
            Side::Sell => self.live_asks.insert(order.id),
        };
        self.orders.insert(order.id, order);
    }

    /// Side of a live order, if the id is known.
    #[must_use]
    pub fn side_of(&self, id: OrderId) -> Option<Side> {
        if self.live_bids.contains(&id) {
            Some(Side::Buy)
        } else if self.live_asks.contains(&id) {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// Whether the id is still in a live set.
    #[must_use]
    pub fn is_live(&self, id: OrderId) -> bool {
        self.live_bids.contains(&id) || self.live_asks.contains(&id)
    }

    /// Lifecycle record for a live order.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&TrackedOrder> {
        self.orders.get(&id)
    }

    /// Record traded volume against an order.
    pub fn record_fill(&mut self, id: OrderId, volume: Volume) {
        if let Some(order) = self.orders.get_mut(&id) {
            order.filled = order.filled + volume;
            order.status = OrderStatus::PartiallyFilled;
        }
    }

    /// Apply a host order-status report.
    ///
    /// Zero remaining volume (full fill, cancel confirmation or rejection)
    /// retires the id from tracking; the slot it occupied, if any, is left
    /// alone. Only an explicit price change recycles a slot.
    pub fn on_order_status(&mut self, id: OrderId, fill_volume: Volume, remaining_volume: Volume) {
        if remaining_volume.is_zero() {
            self.live_bids.remove(&id);
            self.live_asks.remove(&id);
            if self.orders.remove(&id).is_some() {
                debug!(%id, filled = %fill_volume, "Order retired");
            }
        } else if let Some(order) = self.orders.get_mut(&id) {
            order.filled = fill_volume;
            order.status = if fill_volume.is_positive() {
                OrderStatus::PartiallyFilled
            } else {
                OrderStatus::Resting
            };
        }
    }

    /// Number of live orders across both sides.
    #[must_use]
    pub fn live_order_count(&self) -> usize {
        self.live_bids.len() + self.live_asks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairmm_core::Price;

    fn insert_order(ledger: &mut OrderLedger, side: Side, price: i64) -> OrderId {
        let id = ledger.allocate_id();
        ledger.record_insert(TrackedOrder::new(
            id,
            StrategyId::EtfSpread,
            side,
            Price::new(price),
            Volume::new(40),
        ));
        id
    }

    #[test]
    fn test_ids_increase_and_skip_sentinel() {
        let mut ledger = OrderLedger::new();
        let first = ledger.allocate_id();
        let second = ledger.allocate_id();
        assert!(!first.is_none_sentinel());
        assert!(second > first);
    }

    #[test]
    fn test_insert_occupies_slot_and_live_set() {
        let mut ledger = OrderLedger::new();
        let id = insert_order(&mut ledger, Side::Buy, 10_000);

        let slot = ledger.slot(StrategyId::EtfSpread, Side::Buy).unwrap();
        assert_eq!(slot.id, id);
        assert_eq!(slot.price, Price::new(10_000));
        assert_eq!(ledger.side_of(id), Some(Side::Buy));
        assert!(ledger.is_live(id));
        assert_eq!(
            ledger.order(id).unwrap().status,
            pairmm_core::OrderStatus::Pending
        );
    }

    #[test]
    fn test_zero_remaining_retires_id_but_keeps_slot() {
        let mut ledger = OrderLedger::new();
        let id = insert_order(&mut ledger, Side::Sell, 10_300);

        ledger.on_order_status(id, Volume::new(40), Volume::ZERO);
        assert!(!ledger.is_live(id));
        assert!(ledger.order(id).is_none());
        // Slot is recycled by reconciliation, not by status events.
        assert!(ledger.slot(StrategyId::EtfSpread, Side::Sell).is_some());
    }

    #[test]
    fn test_partial_status_keeps_order_live() {
        let mut ledger = OrderLedger::new();
        let id = insert_order(&mut ledger, Side::Buy, 10_000);

        ledger.on_order_status(id, Volume::ZERO, Volume::new(40));
        assert_eq!(
            ledger.order(id).unwrap().status,
            pairmm_core::OrderStatus::Resting
        );

        ledger.on_order_status(id, Volume::new(15), Volume::new(25));
        assert!(ledger.is_live(id));
        assert_eq!(
            ledger.order(id).unwrap().status,
            pairmm_core::OrderStatus::PartiallyFilled
        );
        assert_eq!(ledger.order(id).unwrap().filled, Volume::new(15));
    }

    #[test]
    fn test_clear_slot_leaves_live_set() {
        let mut ledger = OrderLedger::new();
        let id = insert_order(&mut ledger, Side::Buy, 10_000);

        ledger.clear_slot(StrategyId::EtfSpread, Side::Buy);
        assert!(ledger.slot(StrategyId::EtfSpread, Side::Buy).is_none());
        // Still live: a fill may race the cancel.
        assert!(ledger.is_live(id));
    }

    #[test]
    fn test_unknown_status_is_ignored() {
        let mut ledger = OrderLedger::new();
        ledger.on_order_status(OrderId::new(999), Volume::ZERO, Volume::ZERO);
        assert_eq!(ledger.live_order_count(), 0);
    }
}
