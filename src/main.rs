//! Program entry point.
//!
//! Incidental glue around the library: CLI parsing, logger setup, a replay
//! feed adapter, a stub render surface, and exit-code mapping. The feed
//! transport and real map rendering are external collaborators; the replay
//! adapter below makes the program runnable end-to-end from a newline-
//! delimited JSON file (or stdin) of feed records.

use std::path::PathBuf;
use std::pin::Pin;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use geotweet::{
    BoundingBox, ConsoleObserver, FeedClient, FeedError, FeedSignal, MapObserver, Marker, Observe,
    RawEvent, Runner, SimpleFormatter, StopReason, Surface, TerminalKind, FEED_CHANNEL_CAPACITY,
    MAX_LATITUDE, MAX_LONGITUDE,
};

/// Fetch geolocalized tweets and plot them on a map.
#[derive(Parser, Debug)]
#[command(name = "geotweet", version, about)]
struct Cli {
    /// Newline-delimited JSON file of feed records; "-" reads stdin.
    #[arg(default_value = "-")]
    feed: String,

    /// Minimum longitude
    #[arg(long, default_value_t = -MAX_LONGITUDE)]
    min_long: f64,

    /// Minimum latitude
    #[arg(long, default_value_t = -MAX_LATITUDE)]
    min_lat: f64,

    /// Maximum longitude
    #[arg(long, default_value_t = MAX_LONGITUDE)]
    max_long: f64,

    /// Maximum latitude
    #[arg(long, default_value_t = MAX_LATITUDE)]
    max_lat: f64,
}

/// Replays feed records from a file or stdin, applying the subscription
/// filter the way the real transport would.
struct JsonLinesFeed {
    source: Option<PathBuf>,
    pump: Option<JoinHandle<()>>,
}

impl JsonLinesFeed {
    fn new(source: Option<PathBuf>) -> Self {
        Self { source, pump: None }
    }
}

#[async_trait]
impl FeedClient for JsonLinesFeed {
    async fn subscribe(
        &mut self,
        filter: &BoundingBox,
    ) -> Result<mpsc::Receiver<FeedSignal>, FeedError> {
        let reader: Pin<Box<dyn AsyncRead + Send>> = match &self.source {
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| FeedError::Subscribe {
                        detail: format!("{}: {e}", path.display()),
                    })?;
                Box::pin(file)
            }
            None => Box::pin(tokio::io::stdin()),
        };

        let (tx, rx) = mpsc::channel(FEED_CHANNEL_CAPACITY);
        let filter = *filter;
        self.pump = Some(tokio::spawn(async move {
            let mut lines = BufReader::new(reader).lines();
            loop {
                let line = match lines.next_line().await {
                    Ok(Some(line)) => line,
                    // EOF: dropping the sender reads as a disconnect downstream.
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx
                            .send(FeedSignal::terminal(
                                TerminalKind::UnhandledException,
                                e.to_string(),
                            ))
                            .await;
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let signal = match serde_json::from_str::<RawEvent>(&line) {
                    Ok(raw) => {
                        if let Some(coords) = &raw.coordinates {
                            if !filter.contains(coords.longitude(), coords.latitude()) {
                                continue;
                            }
                        }
                        FeedSignal::Event(raw)
                    }
                    Err(e) => FeedSignal::terminal(TerminalKind::UnhandledException, e.to_string()),
                };
                let fatal = matches!(signal, FeedSignal::Terminal { .. });
                if tx.send(signal).await.is_err() || fatal {
                    break;
                }
            }
        }));
        Ok(rx)
    }

    async fn disconnect(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        debug!("replay feed disconnected");
    }
}

/// Render surface that only logs its hooks. Stands in for a plotting
/// window; a real surface cancels its close token when the window closes.
struct LogSurface {
    close: CancellationToken,
}

impl LogSurface {
    fn new() -> Self {
        Self {
            close: CancellationToken::new(),
        }
    }
}

impl Surface for LogSurface {
    fn project(&self, longitude: f64, latitude: f64) -> Result<(f64, f64), String> {
        // Equirectangular: good enough for a surface that only logs.
        Ok((longitude, latitude))
    }

    fn plot(&mut self, x: f64, y: f64, marker: Marker) -> Result<(), String> {
        info!("plot marker {}/{} at ({x}, {y})", marker.style, marker.size);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), String> {
        debug!("redraw requested");
        Ok(())
    }

    fn close_token(&self) -> CancellationToken {
        self.close.clone()
    }

    fn release(&mut self) {
        info!("surface released");
    }
}

async fn run(cli: Cli) -> anyhow::Result<StopReason> {
    let bbox = BoundingBox::new(cli.min_long, cli.min_lat, cli.max_long, cli.max_lat)
        .context("rejected before any subscription attempt")?;

    let source = match cli.feed.as_str() {
        "-" => None,
        path => Some(PathBuf::from(path)),
    };
    let feed = Box::new(JsonLinesFeed::new(source));
    let surface: Arc<Mutex<dyn Surface>> = Arc::new(Mutex::new(LogSurface::new()));

    let observers: Vec<Box<dyn Observe>> = vec![
        Box::new(ConsoleObserver::stdout(SimpleFormatter)),
        Box::new(MapObserver::new(surface.clone())),
    ];

    let runner = Runner::new(bbox, feed, surface, observers);
    Ok(runner.run().await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(reason) if reason.is_failure() => {
            eprintln!("Something went wrong: {reason} - exiting.");
            ExitCode::FAILURE
        }
        Ok(_) => {
            println!("\nGoodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("geotweet: {e:#}");
            ExitCode::FAILURE
        }
    }
}
