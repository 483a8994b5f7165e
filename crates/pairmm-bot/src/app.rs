//! Application event loop.
//!
//! Consumes host events from a channel one at a time and forwards the
//! engine's commands to the transport. The channel enforces the host
//! contract: the previous callback finishes before the next is delivered.

use tokio::sync::mpsc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::trader::Trader;
use crate::transport::CommandSender;
use pairmm_feed::HostEvent;

/// Main application: trader plus transport, driven by an event channel.
pub struct Application {
    trader: Trader,
    sender: Box<dyn CommandSender>,
    events: mpsc::Receiver<HostEvent>,
}

impl Application {
    /// Build the application; the configuration is validated here.
    pub fn new(
        config: AppConfig,
        sender: Box<dyn CommandSender>,
        events: mpsc::Receiver<HostEvent>,
    ) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            trader: Trader::new(&config.maker),
            sender,
            events,
        })
    }

    /// Process events until the channel closes, then log a summary.
    pub async fn run(mut self) -> AppResult<()> {
        info!("Event loop started");
        while let Some(event) = self.events.recv().await {
            let commands = self.trader.handle(&event);
            for command in &commands {
                self.sender.dispatch(command);
            }
        }
        info!("Event stream closed, shutting down");
        self.trader.stats().log_summary();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RecordingSender;
    use pairmm_core::{Instrument, OrderCommand, Price, Volume};
    use pairmm_feed::DEPTH;

    fn book_event(instrument: Instrument, sequence: u64) -> HostEvent {
        let ladder =
            |base: i64, step: i64| -> [Price; DEPTH] { std::array::from_fn(|i| Price::new(base + step * i as i64)) };
        HostEvent::OrderBookUpdate {
            instrument,
            sequence,
            ask_prices: ladder(10_100, 100),
            ask_volumes: [Volume::new(10); DEPTH],
            bid_prices: ladder(10_000, -100),
            bid_volumes: [Volume::new(10); DEPTH],
        }
    }

    #[tokio::test]
    async fn test_run_forwards_commands_and_drains_channel() {
        let sender = RecordingSender::new();
        let (tx, rx) = mpsc::channel(16);
        let app = Application::new(AppConfig::default(), Box::new(sender.clone()), rx).unwrap();

        tx.send(book_event(Instrument::Future, 1)).await.unwrap();
        tx.send(book_event(Instrument::Etf, 1)).await.unwrap();
        drop(tx);

        app.run().await.unwrap();

        let commands = sender.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands.iter().all(OrderCommand::is_insert));
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let (_tx, rx) = mpsc::channel(16);
        let config = AppConfig {
            event_buffer: 0,
            ..Default::default()
        };
        assert!(Application::new(config, Box::new(RecordingSender::new()), rx).is_err());
    }
}
