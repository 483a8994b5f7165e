//! Market data handling for pairmm.
//!
//! Holds the latest depth snapshot per instrument (latest-wins, no
//! sequence-number rejection) and parses recorded host event streams.

pub mod book;
pub mod error;
pub mod events;

pub use book::{DepthSnapshot, Level, OrderBookStore, DEPTH};
pub use error::{FeedError, FeedResult};
pub use events::{EventParser, HostEvent};
