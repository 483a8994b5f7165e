//! Recorded-session replay.
//!
//! Streams host events from a JSON-lines file into the application's
//! event channel, standing in for the exchange transport during offline
//! runs.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::AppResult;
use pairmm_feed::{EventParser, HostEvent};

/// Read `path` and send every parsed event into `tx` in file order.
///
/// Malformed lines are logged and skipped; the stream ends when the file
/// does or when the receiver goes away.
pub async fn stream_file(path: &str, tx: mpsc::Sender<HostEvent>) -> AppResult<usize> {
    let content = tokio::fs::read_to_string(path).await?;
    let parser = EventParser::new();
    let mut sent = 0usize;

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse_line(line) {
            Ok(event) => {
                if tx.send(event).await.is_err() {
                    debug!("Event receiver dropped, stopping replay");
                    break;
                }
                sent += 1;
            }
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Skipping malformed event line");
            }
        }
    }

    debug!(sent, "Replay finished");
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairmm_core::{OrderId, Price, Volume};

    #[tokio::test]
    async fn test_stream_file_sends_events_in_order() {
        let dir = std::env::temp_dir().join("pairmm-replay-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("events.jsonl");
        std::fs::write(
            &path,
            concat!(
                r#"{"type":"order_filled","order_id":1,"price":10000,"volume":5}"#,
                "\n",
                "not json\n",
                "\n",
                r#"{"type":"order_status","order_id":1,"fill_volume":5,"remaining_volume":0,"fees":0}"#,
                "\n",
            ),
        )
        .unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let sent = stream_file(path.to_str().unwrap(), tx).await.unwrap();
        assert_eq!(sent, 2);

        assert_eq!(
            rx.recv().await,
            Some(HostEvent::OrderFilled {
                order_id: OrderId::new(1),
                price: Price::new(10_000),
                volume: Volume::new(5),
            })
        );
        assert!(matches!(
            rx.recv().await,
            Some(HostEvent::OrderStatus { .. })
        ));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let (tx, _rx) = mpsc::channel(1);
        assert!(stream_file("/nonexistent/events.jsonl", tx).await.is_err());
    }
}
