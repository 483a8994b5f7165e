//! Quote reconciliation.
//!
//! Compares target prices against resting orders and emits the minimal
//! cancel/insert command set. Commands are fire-and-forget; the ledger is
//! updated optimistically when a cancel is emitted, not when it is
//! confirmed.

use tracing::debug;

use pairmm_core::{Lifespan, OrderCommand, Price, Side, StrategyId, TrackedOrder, Volume};

use crate::inventory::Inventory;
use crate::ledger::OrderLedger;
use crate::quoting::QuotePrices;
use crate::sizing::SizePair;

/// What a target price means relative to the current resting order.
///
/// Disambiguates the two meanings of a zero price: a zero *target* is
/// `Withdraw` ("no new information"), never a request to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceIntent {
    /// Target equals the resting price; leave the order alone.
    NoChange,
    /// No liquidity to price from; leave any resting order alone.
    Withdraw,
    /// Quote at this price, replacing any differently-priced resting order.
    NewPrice(Price),
}

impl PriceIntent {
    /// Classify a target price against the resting price, if any.
    #[must_use]
    pub fn classify(target: Price, resting: Option<Price>) -> Self {
        if target.is_zero() {
            return Self::Withdraw;
        }
        match resting {
            Some(price) if price == target => Self::NoChange,
            _ => Self::NewPrice(target),
        }
    }
}

/// Reconciles target prices and sizes against the ledger.
#[derive(Debug, Default)]
pub struct OrderManager {
    ledger: OrderLedger,
}

impl OrderManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ledger: OrderLedger::new(),
        }
    }

    #[must_use]
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut OrderLedger {
        &mut self.ledger
    }

    /// Run one reconciliation cycle for a strategy.
    ///
    /// Idempotent: identical targets against a matching book of resting
    /// orders emit nothing.
    pub fn reconcile(
        &mut self,
        strategy: StrategyId,
        targets: QuotePrices,
        sizes: SizePair,
        inventory: &Inventory,
    ) -> Vec<OrderCommand> {
        let mut commands = Vec::new();
        self.reconcile_side(
            strategy,
            Side::Buy,
            targets.bid,
            sizes.bid,
            inventory,
            &mut commands,
        );
        self.reconcile_side(
            strategy,
            Side::Sell,
            targets.ask,
            sizes.ask,
            inventory,
            &mut commands,
        );
        commands
    }

    fn reconcile_side(
        &mut self,
        strategy: StrategyId,
        side: Side,
        target: Price,
        size: Volume,
        inventory: &Inventory,
        commands: &mut Vec<OrderCommand>,
    ) {
        let resting = self.ledger.slot(strategy, side);
        match PriceIntent::classify(target, resting.map(|slot| slot.price)) {
            PriceIntent::NoChange | PriceIntent::Withdraw => {}
            PriceIntent::NewPrice(price) => {
                if let Some(slot) = resting {
                    // Optimistic: the order may still fill before the
                    // cancel lands; the live id sets keep it hedgeable.
                    commands.push(OrderCommand::Cancel { id: slot.id });
                    self.ledger.clear_slot(strategy, side);
                }
                if !size.is_positive() {
                    debug!(%strategy, %side, %price, "Skipping quote, target size is zero");
                    return;
                }
                if !inventory.has_headroom(side) {
                    debug!(
                        %strategy,
                        %side,
                        position = inventory.position(),
                        "Skipping quote, no position headroom"
                    );
                    return;
                }
                let id = self.ledger.allocate_id();
                self.ledger
                    .record_insert(TrackedOrder::new(id, strategy, side, price, size));
                commands.push(OrderCommand::Insert {
                    id,
                    side,
                    price,
                    volume: size,
                    lifespan: Lifespan::GoodForDay,
                });
            }
        }
    }
}
