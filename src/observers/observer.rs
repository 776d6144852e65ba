//! # Observer capability.
//!
//! An observer consumes one qualifying event per [`update`] call and renders
//! it somewhere: the terminal, a map, anything else. Observers are built
//! once at startup and registered with the
//! [`ObserverSet`](crate::ObserverSet), which owns them for the process
//! lifetime and invokes them in registration order.
//!
//! ## Rules
//! - `update` borrows the event for the duration of the call; observers
//!   never keep it.
//! - Failures are returned, not logged: the set logs and isolates them.
//!   A failing observer never affects the others' turn.
//! - Observers own their sink (stream, surface handle) exclusively.
//!
//! [`update`]: Observe::update

use crate::error::ObserverError;
use crate::feed::RawEvent;

/// Event consumer invoked once per qualifying event.
///
/// Implementations report failures through the `Result`; the dispatching
/// [`ObserverSet`](crate::ObserverSet) catches and logs them, so an
/// observer should not terminate the process or swallow its own errors.
pub trait Observe: Send {
    /// Consumes one event. The event is known to carry coordinates.
    fn update(&mut self, raw: &RawEvent) -> Result<(), ObserverError>;

    /// Returns the observer name used in log lines.
    ///
    /// Prefer short, descriptive names. The default uses
    /// `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
