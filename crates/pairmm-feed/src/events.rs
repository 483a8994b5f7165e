//! Host event stream.
//!
//! `HostEvent` mirrors the six inbound callbacks of the host runtime so a
//! session can be carried over a channel or replayed from a recorded
//! JSON-lines file.

use serde::{Deserialize, Serialize};

use crate::book::DEPTH;
use crate::error::{FeedError, FeedResult};
use pairmm_core::{Instrument, OrderId, Price, Volume};

/// One inbound callback from the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Periodic order book state for one instrument.
    OrderBookUpdate {
        instrument: Instrument,
        sequence: u64,
        ask_prices: [Price; DEPTH],
        ask_volumes: [Volume; DEPTH],
        bid_prices: [Price; DEPTH],
        bid_volumes: [Volume; DEPTH],
    },
    /// Aggregated trading activity for one instrument.
    TradeTicks {
        instrument: Instrument,
        sequence: u64,
        ask_prices: [Price; DEPTH],
        ask_volumes: [Volume; DEPTH],
        bid_prices: [Price; DEPTH],
        bid_volumes: [Volume; DEPTH],
    },
    /// Partial or full execution of one of the engine's orders.
    OrderFilled {
        order_id: OrderId,
        price: Price,
        volume: Volume,
    },
    /// Order state change; zero remaining volume is terminal.
    OrderStatus {
        order_id: OrderId,
        fill_volume: Volume,
        remaining_volume: Volume,
        fees: i64,
    },
    /// Execution of a hedge order.
    HedgeFilled {
        order_id: OrderId,
        price: Price,
        volume: Volume,
    },
    /// Host-reported error; `order_id` zero means no specific order.
    Error { order_id: OrderId, message: String },
}

/// Parses recorded host events from JSON lines.
#[derive(Debug, Default)]
pub struct EventParser;

impl EventParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a single JSON line into a host event.
    pub fn parse_line(&self, line: &str) -> FeedResult<HostEvent> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(FeedError::ParseError("empty event line".to_string()));
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_book_update() {
        let parser = EventParser::new();
        let line = r#"{"type":"order_book_update","instrument":"future","sequence":12,
            "ask_prices":[10100,10200,10300,10400,10500],"ask_volumes":[1,2,3,4,5],
            "bid_prices":[10000,9900,9800,9700,9600],"bid_volumes":[5,4,3,2,1]}"#;

        let event = parser.parse_line(line).unwrap();
        match event {
            HostEvent::OrderBookUpdate {
                instrument,
                sequence,
                bid_prices,
                ..
            } => {
                assert_eq!(instrument, Instrument::Future);
                assert_eq!(sequence, 12);
                assert_eq!(bid_prices[0], Price::new(10_000));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_order_status() {
        let parser = EventParser::new();
        let line =
            r#"{"type":"order_status","order_id":3,"fill_volume":40,"remaining_volume":0,"fees":-12}"#;

        let event = parser.parse_line(line).unwrap();
        assert_eq!(
            event,
            HostEvent::OrderStatus {
                order_id: OrderId::new(3),
                fill_volume: Volume::new(40),
                remaining_volume: Volume::ZERO,
                fees: -12,
            }
        );
    }

    #[test]
    fn test_parse_error_event_sentinel_id() {
        let parser = EventParser::new();
        let line = r#"{"type":"error","order_id":0,"message":"throttled"}"#;

        match parser.parse_line(line).unwrap() {
            HostEvent::Error { order_id, message } => {
                assert!(order_id.is_none_sentinel());
                assert_eq!(message, "throttled");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let parser = EventParser::new();
        assert!(parser.parse_line("").is_err());
        assert!(parser.parse_line("not json").is_err());
        assert!(parser
            .parse_line(r#"{"type":"unknown_event"}"#)
            .is_err());
    }

    #[test]
    fn test_round_trip_serialization() {
        let parser = EventParser::new();
        let event = HostEvent::OrderFilled {
            order_id: OrderId::new(9),
            price: Price::new(10_050),
            volume: Volume::new(17),
        };
        let line = serde_json::to_string(&event).unwrap();
        assert_eq!(parser.parse_line(&line).unwrap(), event);
    }
}
