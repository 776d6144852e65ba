//! # Runner: lifecycle controller and single owner of external resources.
//!
//! The [`Runner`] owns the feed connection, the render surface handle, and
//! the one shutdown path. It wires the stream listener to the observer set,
//! opens the filtered subscription, and drives the single dispatch task.
//!
//! ## High-level architecture
//! ```text
//! Inputs to run():
//!   BoundingBox, FeedClient, Surface, Vec<Box<dyn Observe>>
//!
//! Dispatch loop (one task):
//!   feed adapter ── mpsc(1) ──► pump ──► StreamListener ──► ObserverSet ──► observers
//!
//! Shutdown triggers (any one fires the gate, first wins):
//!   - feed terminal condition        (listener → gate)
//!   - OS interrupt signal            (wait_for_shutdown_signal → gate)
//!   - render surface close           (surface close token → gate)
//!
//! Stop effects, exactly once, in order:
//!   drop trigger listeners → feed.disconnect() → surface.release()
//!   → listener Terminated → StopReason returned to the caller
//! ```
//!
//! All observer invocations and the listener's state transitions happen on
//! this one task, which keeps the surface single-writer even though the
//! triggers arrive from independent contexts. Shutdown never interrupts an
//! in-flight dispatch; it only prevents future ones.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::config::BoundingBox;
use crate::error::FeedError;
use crate::feed::{FeedClient, TerminalKind};
use crate::listener::StreamListener;
use crate::observers::{Observe, ObserverSet};
use crate::render::Surface;

use super::shutdown::{wait_for_shutdown_signal, ShutdownGate, StopReason};

/// Controls the main program loop.
///
/// Works as the single owner of all externally-acquired resources: the
/// feed connection, the render surface, and the shutdown gate.
pub struct Runner {
    filter: BoundingBox,
    feed: Box<dyn FeedClient>,
    surface: Arc<Mutex<dyn Surface>>,
    observers: Vec<Box<dyn Observe>>,
    gate: ShutdownGate,
}

impl Runner {
    /// Creates a runner over a validated bounding box, a feed adapter, a
    /// render surface, and the observers to notify, in registration order.
    pub fn new(
        filter: BoundingBox,
        feed: Box<dyn FeedClient>,
        surface: Arc<Mutex<dyn Surface>>,
        observers: Vec<Box<dyn Observe>>,
    ) -> Self {
        Self {
            filter,
            feed,
            surface,
            observers,
            gate: ShutdownGate::new(),
        }
    }

    /// Handle to the shutdown gate, for external triggers and tests.
    pub fn gate(&self) -> ShutdownGate {
        self.gate.clone()
    }

    /// Opens the subscription and drives the dispatch loop until shutdown.
    ///
    /// Returns why the program stopped; the caller maps that to an exit
    /// status and a farewell or diagnostic message.
    pub async fn run(mut self) -> Result<StopReason, FeedError> {
        let mut rx = self.feed.subscribe(&self.filter).await?;
        info!("subscribed with filter {:?}", self.filter.as_filter());

        let observers = ObserverSet::new(std::mem::take(&mut self.observers));
        let mut listener = StreamListener::new(observers, self.gate.clone());

        let close_token = match self.surface.lock() {
            Ok(surface) => surface.close_token(),
            Err(_) => {
                warn!("surface lock poisoned; close trigger disabled");
                Default::default()
            }
        };

        // Inner scope so the trigger listeners (signal handlers, close
        // watcher, feed hand-off) are gone before the stop effects run.
        {
            let interrupt = wait_for_shutdown_signal();
            tokio::pin!(interrupt);
            let closed = close_token.cancelled_owned();
            tokio::pin!(closed);

            loop {
                tokio::select! {
                    // Covers gate firings that do not pass through this loop,
                    // e.g. an embedding application requesting shutdown.
                    _ = self.gate.fired() => break,
                    delivery = rx.recv() => match delivery {
                        Some(signal) => {
                            listener.on_signal(signal);
                            if self.gate.is_fired() {
                                break;
                            }
                        }
                        // Adapter dropped the sender without a terminal notice.
                        None => {
                            listener.on_terminal(TerminalKind::Disconnected, "stream closed");
                            break;
                        }
                    },
                    res = &mut interrupt => {
                        if let Err(e) = res {
                            warn!("signal listener failed, shutting down: {e}");
                        }
                        self.gate.request(StopReason::Interrupted);
                        break;
                    }
                    _ = &mut closed => {
                        self.gate.request(StopReason::SurfaceClosed);
                        break;
                    }
                }
            }

            drop(rx);
        }

        Ok(self.stop(&mut listener).await)
    }

    /// Releases everything, exactly once, and reports why.
    ///
    /// The gate has already fired by the time this runs; its single-fire
    /// flag is what keeps racing triggers from scheduling the effects
    /// twice. After this returns no observer is invoked again.
    async fn stop(&mut self, listener: &mut StreamListener) -> StopReason {
        self.feed.disconnect().await;
        if let Ok(mut surface) = self.surface.lock() {
            surface.release();
        }
        listener.terminate();

        let reason = self.gate.reason().unwrap_or(StopReason::Interrupted);
        info!("shutdown complete: {reason}");
        reason
    }
}
