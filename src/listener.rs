//! # Stream listener: feed callbacks in, classified outcomes out.
//!
//! [`StreamListener`] is the bridge between the feed adapter and the
//! observer fan-out. Each [`FeedSignal`] is classified as either
//! *continuing* (a new event, handed to the [`ObserverSet`]) or *terminal*
//! (routed to the shutdown gate).
//!
//! ## State machine
//! ```text
//! Listening ── on_terminal ──► ShuttingDown ── terminate() ──► Terminated
//!     │                             │
//!     └── on_event → dispatch       └── callbacks ignored (no-op)
//! ```
//!
//! `Listening` is the only state in which callbacks are accepted. The first
//! terminal callback fires the shutdown gate exactly once; duplicate or
//! racing callbacks of any kind afterwards are ignored.

use log::{debug, error};

use crate::core::{ShutdownGate, StopReason};
use crate::feed::{FeedSignal, RawEvent, TerminalKind};
use crate::observers::ObserverSet;

/// Listener lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerState {
    /// Accepting callbacks.
    Listening,
    /// Shutdown fired; further callbacks are no-ops.
    ShuttingDown,
    /// Stop effects have run; the listener is inert.
    Terminated,
}

/// Adapts feed callbacks into dispatch and shutdown decisions.
pub struct StreamListener {
    observers: ObserverSet,
    gate: ShutdownGate,
    state: ListenerState,
}

impl StreamListener {
    /// Creates a listener over the given observer set, wired to the
    /// runner's shutdown gate.
    pub fn new(observers: ObserverSet, gate: ShutdownGate) -> Self {
        Self {
            observers,
            gate,
            state: ListenerState::Listening,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ListenerState {
        self.state
    }

    /// Routes one feed signal.
    pub fn on_signal(&mut self, signal: FeedSignal) {
        match signal {
            FeedSignal::Event(raw) => self.on_event(&raw),
            FeedSignal::Terminal { kind, detail } => self.on_terminal(kind, &detail),
        }
    }

    /// Notifies all observers of a new geolocalized event.
    ///
    /// Events without coordinates are skipped silently; that is not an
    /// error. No-op outside the `Listening` state.
    pub fn on_event(&mut self, raw: &RawEvent) {
        if self.state != ListenerState::Listening {
            return;
        }
        if !raw.has_coordinates() {
            debug!("skipping event without coordinates");
            return;
        }
        self.observers.dispatch(raw);
    }

    /// Handles a feed-level terminal condition.
    ///
    /// Every kind is unconditionally fatal: log a diagnostic and fire the
    /// single shutdown path. No retry, no backoff. Only the first terminal
    /// callback has any effect.
    pub fn on_terminal(&mut self, kind: TerminalKind, detail: &str) {
        if self.state != ListenerState::Listening {
            return;
        }
        error!("feed terminal condition: {} ({detail})", kind.as_label());
        self.state = ListenerState::ShuttingDown;
        self.gate.request(StopReason::Feed {
            kind,
            detail: detail.to_string(),
        });
    }

    /// Marks the listener inert once the runner's stop effects have run.
    pub fn terminate(&mut self) {
        self.state = ListenerState::Terminated;
    }
}
