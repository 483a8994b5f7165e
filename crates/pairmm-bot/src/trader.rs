//! The event dispatcher: callback surface of the decision core.
//!
//! The host runtime delivers one callback at a time and each handler runs
//! to completion before the next arrives, so all state lives here, owned,
//! with no internal concurrency. Handlers return the outbound commands
//! they produced; the caller forwards them to the transport.

use tracing::{debug, info, warn};

use pairmm_core::{Instrument, OrderCommand, OrderId, Price, StrategyId, Volume};
use pairmm_feed::{HostEvent, OrderBookStore, DEPTH};
use pairmm_mm::{
    Inventory, MakerConfig, OrderManager, PositionHedger, QuotingStrategy, SizingEngine,
};
use pairmm_telemetry::SessionStats;

/// The decision core behind the host callback contract.
pub struct Trader {
    books: OrderBookStore,
    inventory: Inventory,
    sizing: SizingEngine,
    quoting: QuotingStrategy,
    manager: OrderManager,
    hedger: PositionHedger,
    stats: SessionStats,
}

impl Trader {
    /// Build the engine from a validated maker configuration.
    #[must_use]
    pub fn new(config: &MakerConfig) -> Self {
        Self {
            books: OrderBookStore::new(),
            inventory: Inventory::new(config.position_limit),
            sizing: SizingEngine::new(config),
            quoting: QuotingStrategy::new(config),
            manager: OrderManager::new(),
            hedger: PositionHedger::new(config),
            stats: SessionStats::new(),
        }
    }

    /// Route one host event to its handler.
    pub fn handle(&mut self, event: &HostEvent) -> Vec<OrderCommand> {
        match event {
            HostEvent::OrderBookUpdate {
                instrument,
                sequence,
                ask_prices,
                ask_volumes,
                bid_prices,
                bid_volumes,
            } => self.on_order_book_update(
                *instrument,
                *sequence,
                ask_prices,
                ask_volumes,
                bid_prices,
                bid_volumes,
            ),
            HostEvent::TradeTicks {
                instrument,
                sequence,
                ..
            } => self.on_trade_ticks(*instrument, *sequence),
            HostEvent::OrderFilled {
                order_id,
                price,
                volume,
            } => self.on_order_filled(*order_id, *price, *volume),
            HostEvent::OrderStatus {
                order_id,
                fill_volume,
                remaining_volume,
                fees,
            } => self.on_order_status(*order_id, *fill_volume, *remaining_volume, *fees),
            HostEvent::HedgeFilled {
                order_id,
                price,
                volume,
            } => self.on_hedge_filled(*order_id, *price, *volume),
            HostEvent::Error { order_id, message } => self.on_error(*order_id, message),
        }
    }

    /// Order book state for one instrument. Updates the store, then runs a
    /// reconciliation cycle when the tradable leg ticked.
    pub fn on_order_book_update(
        &mut self,
        instrument: Instrument,
        sequence: u64,
        ask_prices: &[Price; DEPTH],
        ask_volumes: &[Volume; DEPTH],
        bid_prices: &[Price; DEPTH],
        bid_volumes: &[Volume; DEPTH],
    ) -> Vec<OrderCommand> {
        self.stats.book_updates += 1;
        self.books.update(
            instrument,
            sequence,
            ask_prices,
            ask_volumes,
            bid_prices,
            bid_volumes,
        );
        debug!(%instrument, sequence, "Order book updated");

        if !instrument.is_tradable() {
            return Vec::new();
        }

        let sizes = self.sizing.target_sizes(self.inventory.position());
        let targets = self
            .quoting
            .target_prices(self.books.snapshot(Instrument::Future));
        let commands =
            self.manager
                .reconcile(StrategyId::EtfSpread, targets, sizes, &self.inventory);
        self.count_commands(&commands);
        commands
    }

    /// Trading activity report; informational only.
    pub fn on_trade_ticks(&mut self, instrument: Instrument, sequence: u64) -> Vec<OrderCommand> {
        self.stats.trade_ticks += 1;
        debug!(%instrument, sequence, "Trade ticks");
        Vec::new()
    }

    /// Partial or full execution of one of the engine's orders.
    pub fn on_order_filled(
        &mut self,
        order_id: OrderId,
        price: Price,
        volume: Volume,
    ) -> Vec<OrderCommand> {
        self.stats.fills += 1;
        let hedge = self.hedger.on_fill(
            self.manager.ledger_mut(),
            &mut self.inventory,
            order_id,
            price,
            volume,
        );
        match hedge {
            Some(command) => {
                self.stats.hedges += 1;
                vec![command]
            }
            None => {
                debug!(%order_id, "Fill for unknown order ignored");
                Vec::new()
            }
        }
    }

    /// Order state change from the host; zero remaining volume retires the
    /// id so the next cycle can re-quote the side.
    pub fn on_order_status(
        &mut self,
        order_id: OrderId,
        fill_volume: Volume,
        remaining_volume: Volume,
        fees: i64,
    ) -> Vec<OrderCommand> {
        debug!(%order_id, %fill_volume, %remaining_volume, fees, "Order status");
        self.manager
            .ledger_mut()
            .on_order_status(order_id, fill_volume, remaining_volume);
        Vec::new()
    }

    /// Hedge execution report; the hedge leg settles externally.
    pub fn on_hedge_filled(
        &mut self,
        order_id: OrderId,
        price: Price,
        volume: Volume,
    ) -> Vec<OrderCommand> {
        self.stats.hedge_fills += 1;
        info!(%order_id, %price, %volume, "Hedge filled");
        Vec::new()
    }

    /// Host-reported error. For a known order id this is an implicit
    /// zero-remaining status; otherwise there is nothing to reconcile.
    pub fn on_error(&mut self, order_id: OrderId, message: &str) -> Vec<OrderCommand> {
        self.stats.errors += 1;
        warn!(%order_id, message, "Host error");
        if !order_id.is_none_sentinel() && self.manager.ledger().is_live(order_id) {
            self.manager
                .ledger_mut()
                .on_order_status(order_id, Volume::ZERO, Volume::ZERO);
        }
        Vec::new()
    }

    /// Current net position in lots.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.inventory.position()
    }

    /// Session counters.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    fn count_commands(&mut self, commands: &[OrderCommand]) {
        for command in commands {
            match command {
                OrderCommand::Insert { .. } => self.stats.inserts += 1,
                OrderCommand::Cancel { .. } => self.stats.cancels += 1,
                OrderCommand::Hedge { .. } => self.stats.hedges += 1,
            }
        }
    }
}
