//! # Event observers and their fan-out set.
//!
//! Observers are the rendering consumers of the pipeline: each one receives
//! every qualifying event and acts according to its role.
//!
//! ## Event flow
//! ```text
//! StreamListener ── dispatch(&RawEvent) ──► ObserverSet
//!                                               │ (registration order)
//!                                    ┌──────────┼──────────┐
//!                                    ▼          ▼          ▼
//!                                 console      map       custom
//!                                 (stdout)  (surface)     ...
//! ```
//!
//! ## Contents
//! - [`Observe`] the consumer capability
//! - [`ObserverSet`] the dispatcher: ordered, fault-isolated fan-out
//! - [`ConsoleObserver`] renders tweets on a text sink
//! - [`MapObserver`] plots tweet locations on the render surface

mod console;
mod map;
mod observer;
mod set;

pub use console::ConsoleObserver;
pub use map::MapObserver;
pub use observer::Observe;
pub use set::ObserverSet;
