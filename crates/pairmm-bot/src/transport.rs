//! Outbound order-transport contract.
//!
//! The engine's commands are one-way; implementations forward them to the
//! exchange connectivity layer. A recording double is provided for tests
//! and a logging double for replay runs.

use std::sync::{Arc, Mutex};

use tracing::info;

use pairmm_core::{Lifespan, OrderCommand, OrderId, Price, Side, Volume};

/// Transport collaborator interface for outbound commands.
///
/// All methods are fire-and-forget: no acknowledgement, no return value.
pub trait CommandSender: Send {
    /// Place a resting order in the tradable instrument.
    fn insert_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume, lifespan: Lifespan);

    /// Cancel a resting order.
    fn cancel_order(&mut self, id: OrderId);

    /// Place a marketable hedge order in the hedge instrument.
    fn insert_hedge_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume);

    /// Route a command value to the matching method.
    fn dispatch(&mut self, command: &OrderCommand) {
        match *command {
            OrderCommand::Insert {
                id,
                side,
                price,
                volume,
                lifespan,
            } => self.insert_order(id, side, price, volume, lifespan),
            OrderCommand::Cancel { id } => self.cancel_order(id),
            OrderCommand::Hedge {
                id,
                side,
                price,
                volume,
            } => self.insert_hedge_order(id, side, price, volume),
        }
    }
}

/// Sender that logs every command; used for replay runs where no real
/// transport exists.
#[derive(Debug, Default)]
pub struct LoggingSender;

impl CommandSender for LoggingSender {
    fn insert_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume, lifespan: Lifespan) {
        info!(%id, %side, %price, %volume, %lifespan, "insert order");
    }

    fn cancel_order(&mut self, id: OrderId) {
        info!(%id, "cancel order");
    }

    fn insert_hedge_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume) {
        info!(%id, %side, %price, %volume, "insert hedge order");
    }
}

/// Recording sender for tests.
///
/// Clones share the same backing store, so a handle kept outside the
/// application can inspect what was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingSender {
    commands: Arc<Mutex<Vec<OrderCommand>>>,
}

impl RecordingSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded commands.
    #[must_use]
    pub fn commands(&self) -> Vec<OrderCommand> {
        self.commands.lock().expect("recording sender poisoned").clone()
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.lock().expect("recording sender poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, command: OrderCommand) {
        self.commands
            .lock()
            .expect("recording sender poisoned")
            .push(command);
    }
}

impl CommandSender for RecordingSender {
    fn insert_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume, lifespan: Lifespan) {
        self.record(OrderCommand::Insert {
            id,
            side,
            price,
            volume,
            lifespan,
        });
    }

    fn cancel_order(&mut self, id: OrderId) {
        self.record(OrderCommand::Cancel { id });
    }

    fn insert_hedge_order(&mut self, id: OrderId, side: Side, price: Price, volume: Volume) {
        self.record(OrderCommand::Hedge {
            id,
            side,
            price,
            volume,
        });
    }
}
