//! pairmm - pairwise spread market maker - entry point.
//!
//! Quotes a future/ETF pair from recorded or host-delivered events. In
//! production the engine is embedded by the exchange connectivity layer;
//! this binary drives it from a recorded JSON-lines session.

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use pairmm_bot::{replay, AppConfig, Application, LoggingSender};

/// Pairwise spread market maker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PAIRMM_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Recorded host-event file (JSON lines) to replay
    #[arg(short, long)]
    events: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pairmm_telemetry::init_logging()?;

    info!("Starting pairmm v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(args.config.as_deref())?;
    info!(
        position_limit = config.maker.position_limit,
        lot_size = config.maker.lot_size,
        quote_depth = config.maker.quote_depth,
        "Configuration loaded"
    );

    let Some(events_path) = args.events else {
        warn!("No --events file given; in production the host transport embeds this engine as a library");
        return Ok(());
    };

    let (tx, rx) = mpsc::channel(config.event_buffer);
    let app = Application::new(config, Box::new(LoggingSender), rx)?;

    tokio::spawn(async move {
        if let Err(e) = replay::stream_file(&events_path, tx).await {
            error!(error = %e, "Replay failed");
        }
    });

    app.run().await?;

    Ok(())
}
