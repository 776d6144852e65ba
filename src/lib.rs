//! # geotweet
//!
//! **geotweet** consumes a push feed of geolocalized tweets and fans each
//! one out to independent rendering observers: the terminal, a world map,
//! anything implementing [`Observe`].
//!
//! ## Architecture
//! ```text
//!   feed transport (external)
//!        │
//!        ▼
//!   FeedClient adapter ── FeedSignal ──► mpsc(1) hand-off
//!                                            │
//!                                            ▼  (single dispatch task)
//!                                     StreamListener
//!                                      │          │
//!                            Event(raw)│          │Terminal(kind, detail)
//!                                      ▼          ▼
//!                                 ObserverSet   ShutdownGate ◄── OS signal
//!                                      │              ▲      ◄── surface close
//!                             ┌────────┴───────┐      │
//!                             ▼                ▼      │
//!                      ConsoleObserver    MapObserver │
//!                       (Format → sink)  (project/plot/redraw)
//!                                                     │
//!                                            Runner::stop(): disconnect feed,
//!                                            release surface, exactly once
//! ```
//!
//! Data flows one direction, feed to observers. Control flows back only
//! for shutdown: any of a feed-level terminal condition, an OS interrupt,
//! or the render surface closing fires the single-fire [`ShutdownGate`],
//! and the [`Runner`] releases everything exactly once.
//!
//! ## Failure model
//! | Tier | Scope | Handling |
//! |------|-------|----------|
//! | per-observer | malformed event, sink write, render call | caught and logged by [`ObserverSet`]; pipeline stays live |
//! | feed-level | exception, bad status, timeout, disconnect, warning | unconditionally fatal; single shutdown path, no retry |
//!
//! ## Example
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use geotweet::{
//!     BoundingBox, ConsoleObserver, FeedClient, MapObserver, Observe, Runner,
//!     SimpleFormatter, Surface,
//! };
//!
//! async fn run(feed: Box<dyn FeedClient>, surface: Arc<Mutex<dyn Surface>>) {
//!     let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
//!     let observers: Vec<Box<dyn Observe>> = vec![
//!         Box::new(ConsoleObserver::stdout(SimpleFormatter)),
//!         Box::new(MapObserver::new(surface.clone())),
//!     ];
//!     let runner = Runner::new(bbox, feed, surface, observers);
//!     let reason = runner.run().await.unwrap();
//!     if reason.is_failure() {
//!         eprintln!("Something went wrong: {reason} - exiting.");
//!     } else {
//!         println!("\nGoodbye!");
//!     }
//! }
//! ```

mod config;
mod core;
mod error;
mod feed;
mod format;
mod listener;
mod observers;
mod render;
mod tweet;

// ---- Public re-exports ----

pub use config::{BoundingBox, MAX_LATITUDE, MAX_LONGITUDE};
pub use core::{wait_for_shutdown_signal, Runner, ShutdownGate, StopReason};
pub use error::{ConfigError, FeedError, ObserverError};
pub use feed::{
    Author, CoordinatePair, FeedClient, FeedSignal, RawEvent, TerminalKind, FEED_CHANNEL_CAPACITY,
};
pub use format::{Format, SimpleFormatter};
pub use listener::{ListenerState, StreamListener};
pub use observers::{ConsoleObserver, MapObserver, Observe, ObserverSet};
pub use render::{Marker, Surface};
pub use tweet::GeoTweet;
