//! Post-fill hedging.
//!
//! Every fill on an owned quote moves the position and is immediately
//! offset by one marketable order on the opposite side in the hedge
//! instrument, sized exactly to the fill. Hedge fills themselves are only
//! logged; their risk effect settles in the hedge instrument.

use tracing::info;

use pairmm_core::{OrderCommand, OrderId, Price, Side, Volume};

use crate::config::MakerConfig;
use crate::inventory::Inventory;
use crate::ledger::OrderLedger;

/// Emits one hedge order per fill.
#[derive(Debug)]
pub struct PositionHedger {
    buy_price: Price,
    sell_price: Price,
}

impl PositionHedger {
    #[must_use]
    pub fn new(config: &MakerConfig) -> Self {
        Self {
            buy_price: config.hedge_buy_price(),
            sell_price: config.hedge_sell_price(),
        }
    }

    /// Handle a fill on one of the engine's orders.
    ///
    /// Updates the position and returns the hedge command, or `None` when
    /// the id is not in the live sets (hedge fills, long-retired ids).
    /// Fills are honored even for orders already cancelled from the
    /// ledger's slot bookkeeping; the cancel/fill race is expected.
    pub fn on_fill(
        &self,
        ledger: &mut OrderLedger,
        inventory: &mut Inventory,
        id: OrderId,
        price: Price,
        volume: Volume,
    ) -> Option<OrderCommand> {
        let side = ledger.side_of(id)?;
        ledger.record_fill(id, volume);
        inventory.apply_fill(side, volume);

        let (hedge_side, hedge_price) = match side {
            Side::Buy => (Side::Sell, self.sell_price),
            Side::Sell => (Side::Buy, self.buy_price),
        };
        let hedge_id = ledger.allocate_id();

        info!(
            %id,
            %side,
            fill_price = %price,
            %volume,
            position = inventory.position(),
            hedge_id = %hedge_id,
            "Fill hedged"
        );

        Some(OrderCommand::Hedge {
            id: hedge_id,
            side: hedge_side,
            price: hedge_price,
            volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairmm_core::{StrategyId, TrackedOrder};

    fn setup() -> (PositionHedger, OrderLedger, Inventory) {
        let config = MakerConfig::default();
        (
            PositionHedger::new(&config),
            OrderLedger::new(),
            Inventory::new(config.position_limit),
        )
    }

    fn insert(ledger: &mut OrderLedger, side: Side, price: i64, size: i64) -> OrderId {
        let id = ledger.allocate_id();
        ledger.record_insert(TrackedOrder::new(
            id,
            StrategyId::EtfSpread,
            side,
            Price::new(price),
            Volume::new(size),
        ));
        id
    }

    #[test]
    fn test_bid_fill_hedges_with_sell() {
        let (hedger, mut ledger, mut inventory) = setup();
        let id = insert(&mut ledger, Side::Buy, 10_000, 40);

        let hedge = hedger
            .on_fill(&mut ledger, &mut inventory, id, Price::new(10_000), Volume::new(25))
            .unwrap();

        assert_eq!(inventory.position(), 25);
        match hedge {
            OrderCommand::Hedge {
                side,
                price,
                volume,
                id: hedge_id,
            } => {
                assert_eq!(side, Side::Sell);
                assert_eq!(price, Price::new(100));
                assert_eq!(volume, Volume::new(25));
                assert_ne!(hedge_id, id);
            }
            other => panic!("expected hedge, got {other:?}"),
        }
    }

    #[test]
    fn test_ask_fill_hedges_with_buy_at_upper_bound() {
        let (hedger, mut ledger, mut inventory) = setup();
        let id = insert(&mut ledger, Side::Sell, 10_300, 40);

        let hedge = hedger
            .on_fill(&mut ledger, &mut inventory, id, Price::new(10_300), Volume::new(40))
            .unwrap();

        assert_eq!(inventory.position(), -40);
        match hedge {
            OrderCommand::Hedge { side, price, volume, .. } => {
                assert_eq!(side, Side::Buy);
                assert_eq!(price, Price::new(2_147_483_600));
                assert_eq!(volume, Volume::new(40));
            }
            other => panic!("expected hedge, got {other:?}"),
        }
    }

    #[test]
    fn test_every_fill_produces_exactly_one_hedge() {
        let (hedger, mut ledger, mut inventory) = setup();
        let id = insert(&mut ledger, Side::Buy, 10_000, 40);

        for fill in [10, 10, 20] {
            let hedge = hedger.on_fill(
                &mut ledger,
                &mut inventory,
                id,
                Price::new(10_000),
                Volume::new(fill),
            );
            assert!(matches!(
                hedge,
                Some(OrderCommand::Hedge { volume, .. }) if volume == Volume::new(fill)
            ));
        }
        assert_eq!(inventory.position(), 40);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let (hedger, mut ledger, mut inventory) = setup();
        let hedge = hedger.on_fill(
            &mut ledger,
            &mut inventory,
            OrderId::new(321),
            Price::new(10_000),
            Volume::new(10),
        );
        assert!(hedge.is_none());
        assert_eq!(inventory.position(), 0);
    }

    #[test]
    fn test_fill_after_cancel_request_is_still_hedged() {
        let (hedger, mut ledger, mut inventory) = setup();
        let id = insert(&mut ledger, Side::Buy, 10_000, 40);

        // Cancel emitted: slot cleared, id still live.
        ledger.clear_slot(StrategyId::EtfSpread, Side::Buy);

        let hedge = hedger.on_fill(
            &mut ledger,
            &mut inventory,
            id,
            Price::new(10_000),
            Volume::new(40),
        );
        assert!(hedge.is_some());
        assert_eq!(inventory.position(), 40);
    }

    #[test]
    fn test_fill_after_terminal_status_is_ignored() {
        let (hedger, mut ledger, mut inventory) = setup();
        let id = insert(&mut ledger, Side::Buy, 10_000, 40);
        ledger.on_order_status(id, Volume::new(40), Volume::ZERO);

        let hedge = hedger.on_fill(
            &mut ledger,
            &mut inventory,
            id,
            Price::new(10_000),
            Volume::new(40),
        );
        assert!(hedge.is_none());
    }
}
