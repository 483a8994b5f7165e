//! Quoting and order lifecycle engine for the pairwise spread strategy.
//!
//! Decision pipeline on every tradable-instrument book update:
//!
//! ```text
//! book update → SizingEngine.target_sizes(position)
//!             → QuotingStrategy.target_prices(reference ladder)
//!             → OrderManager.reconcile() → insert/cancel commands
//! fill event  → PositionHedger.on_fill() → hedge command
//! ```
//!
//! Everything here is synchronous state mutation; commands come back as
//! values for the caller to forward to the transport collaborator.

pub mod config;
pub mod hedger;
pub mod inventory;
pub mod ledger;
pub mod manager;
pub mod quoting;
pub mod sizing;

pub use config::MakerConfig;
pub use hedger::PositionHedger;
pub use inventory::Inventory;
pub use ledger::{OrderLedger, SlotOrder};
pub use manager::{OrderManager, PriceIntent};
pub use quoting::{QuotePrices, QuotingStrategy};
pub use sizing::{SizePair, SizingEngine};
