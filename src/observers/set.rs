//! # ObserverSet: ordered fan-out with failure isolation.
//!
//! [`ObserverSet`] delivers one event to every registered observer, in
//! registration order, catching whatever goes wrong inside each one.
//!
//! ## What it guarantees
//! - Exactly one `update` call per observer per dispatched event.
//! - Stable registration order.
//! - An `Err` or a panic inside one observer is logged and does not cancel
//!   the remaining observers, and never reaches the caller.
//!
//! ## What it does **not** guarantee
//! - No marker/line is guaranteed to have been produced by an observer
//!   that failed mid-update.
//!
//! ## Diagram
//! ```text
//!    dispatch(&RawEvent)
//!        │
//!        ├──► observer 1 ─► update() ─ Err/panic? ─ log, keep going
//!        ├──► observer 2 ─► update()
//!        └──► observer N ─► update()
//! ```
//!
//! Dispatch is synchronous and blocking on purpose: while one event is
//! being fanned out, feed delivery is stalled. A slow observer throttles
//! feed consumption; that is the backpressure model.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::error;

use crate::feed::RawEvent;

use super::Observe;

/// Ordered collection of observers with per-observer failure isolation.
pub struct ObserverSet {
    observers: Vec<Box<dyn Observe>>,
}

impl ObserverSet {
    /// Creates a set over the given observers. Registration order is
    /// dispatch order.
    #[must_use]
    pub fn new(observers: Vec<Box<dyn Observe>>) -> Self {
        Self { observers }
    }

    /// Fans one event out to every observer, in order.
    ///
    /// The event must already be known to carry coordinates; the
    /// [`StreamListener`](crate::StreamListener) filters before calling.
    pub fn dispatch(&mut self, raw: &RawEvent) {
        for observer in &mut self.observers {
            let name = observer.name();
            match catch_unwind(AssertUnwindSafe(|| observer.update(raw))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("observer '{name}' failed: {} ({e})", e.as_label());
                }
                Err(panic_err) => {
                    error!("observer '{name}' panicked: {panic_err:?}");
                }
            }
        }
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}
