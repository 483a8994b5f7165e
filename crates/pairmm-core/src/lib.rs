//! Core domain types for the pairwise spread market maker.
//!
//! This crate provides the fundamental types used throughout the engine:
//! - `Instrument`: the two-legged universe (hedge future, quoted ETF)
//! - `Price`, `Volume`: integral tick/lot newtypes
//! - `Side`, `Lifespan`, `OrderId`, `StrategyId`: order identity enums
//! - `TrackedOrder`, `OrderStatus`, `OrderCommand`: order lifecycle types

pub mod error;
pub mod execution;
pub mod instrument;
pub mod order;
pub mod units;

pub use error::{CoreError, Result};
pub use execution::{OrderCommand, OrderStatus, TrackedOrder};
pub use instrument::Instrument;
pub use order::{Lifespan, OrderId, Side, StrategyId};
pub use units::{Price, Volume, MAXIMUM_ASK, MINIMUM_BID};
