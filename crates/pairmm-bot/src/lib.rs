//! Pairwise spread market-making engine.
//!
//! Wires the decision core to a host event stream:
//! - `Trader`: the callback surface (event dispatcher) of the engine
//! - `CommandSender`: the outbound order-transport contract
//! - `Application`: channel-driven event loop
//! - `replay`: JSON-lines event source for recorded sessions

pub mod app;
pub mod config;
pub mod error;
pub mod replay;
pub mod trader;
pub mod transport;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use trader::Trader;
pub use transport::{CommandSender, LoggingSender, RecordingSender};
