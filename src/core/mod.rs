//! Runtime core: lifecycle and shutdown.
//!
//! The public API from this module is [`Runner`], which owns the feed
//! connection and the render surface, and [`ShutdownGate`]/[`StopReason`],
//! the single shutdown path shared by all trigger contexts.
//!
//! Internal modules:
//! - [`runner`]: dispatch loop and ordered resource teardown;
//! - [`shutdown`]: single-fire gate and cross-platform signal handling.

mod runner;
mod shutdown;

pub use runner::Runner;
pub use shutdown::{wait_for_shutdown_signal, ShutdownGate, StopReason};
