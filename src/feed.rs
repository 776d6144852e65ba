//! # Feed adapter boundary: inbound records and terminal conditions.
//!
//! The transport and authentication details of the push feed live outside
//! this crate. A concrete adapter implements [`FeedClient`] and delivers
//! [`FeedSignal`]s through the hand-off channel returned by
//! [`FeedClient::subscribe`]; everything downstream (listener, dispatcher,
//! observers) only sees the types in this module.
//!
//! ## Delivery flow
//! ```text
//! transport ──► FeedClient adapter ──► mpsc(1) ──► Runner pump ──► StreamListener
//! ```
//!
//! The channel is bounded with capacity 1 on purpose: while one event is
//! being fanned out, the adapter's `send` blocks, so a slow observer
//! throttles feed consumption directly (backpressure by blocking).

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::config::BoundingBox;
use crate::error::FeedError;

/// Hand-off channel capacity between the feed adapter and the dispatch loop.
///
/// Kept at 1 so delivery stalls while a dispatch is in flight.
pub const FEED_CHANNEL_CAPACITY: usize = 1;

/// Geographic point as carried on the wire: `[longitude, latitude]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoordinatePair {
    /// `[longitude, latitude]`, in that order.
    pub coordinates: [f64; 2],
}

impl CoordinatePair {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Author block of an inbound record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: Option<String>,
    /// Handle, without the leading `@`.
    pub screen_name: Option<String>,
}

/// Inbound, not-yet-validated record from the feed.
///
/// Any field may be missing; validation happens per observer when a
/// [`GeoTweet`](crate::GeoTweet) is derived. A `RawEvent` lives for exactly
/// one dispatch pass.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEvent {
    /// Geotag, if the event carries one. Events without it are skipped
    /// silently before dispatch.
    #[serde(default)]
    pub coordinates: Option<CoordinatePair>,
    #[serde(default)]
    pub user: Option<Author>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawEvent {
    /// True when the event carries a geotag and therefore qualifies for
    /// dispatch.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Classification of feed-level terminal conditions.
///
/// Every kind is unconditionally fatal: the listener routes it to the single
/// shutdown path. No retry, no backoff, by design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    /// The transport raised an error the adapter could not handle.
    UnhandledException,
    /// The upstream service answered with an unexpected status code.
    BadStatusCode,
    /// The stream went silent past the transport timeout.
    Timeout,
    /// The upstream closed the stream.
    Disconnected,
    /// The upstream sent a warning notice.
    Warning,
}

impl TerminalKind {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            TerminalKind::UnhandledException => "unhandled_exception",
            TerminalKind::BadStatusCode => "bad_status_code",
            TerminalKind::Timeout => "timeout",
            TerminalKind::Disconnected => "disconnected",
            TerminalKind::Warning => "warning",
        }
    }
}

impl std::fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TerminalKind::UnhandledException => "unhandled exception",
            TerminalKind::BadStatusCode => "bad status code",
            TerminalKind::Timeout => "timeout",
            TerminalKind::Disconnected => "disconnected",
            TerminalKind::Warning => "warning received",
        };
        f.write_str(s)
    }
}

/// One delivery from the feed adapter: either a new event or a terminal
/// condition that ends the stream.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedSignal {
    /// A new inbound record.
    Event(RawEvent),
    /// A feed-level terminal condition. The stream is over.
    Terminal {
        kind: TerminalKind,
        detail: String,
    },
}

impl FeedSignal {
    /// Builds a terminal signal.
    pub fn terminal(kind: TerminalKind, detail: impl Into<String>) -> Self {
        FeedSignal::Terminal {
            kind,
            detail: detail.into(),
        }
    }
}

/// Push-feed adapter boundary.
///
/// An implementation owns the transport connection. [`subscribe`] opens the
/// filtered stream and returns the receiving half of the hand-off channel;
/// the adapter pushes [`FeedSignal`]s into the sending half from whatever
/// execution context its transport uses. Dropping the sender without a
/// terminal signal is treated as [`TerminalKind::Disconnected`] downstream.
///
/// [`subscribe`]: FeedClient::subscribe
#[async_trait]
pub trait FeedClient: Send {
    /// Opens the push subscription filtered by the bounding box.
    async fn subscribe(&mut self, filter: &BoundingBox) -> Result<mpsc::Receiver<FeedSignal>, FeedError>;

    /// Tears the connection down. Must be idempotent; called exactly once
    /// by the runner during shutdown, but adapters may also disconnect on
    /// their own when the upstream goes away.
    async fn disconnect(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_schema_decodes_full_record() {
        let json = r#"{
            "coordinates": {"coordinates": [100.0, 45.0]},
            "user": {"name": "user_name", "screen_name": "user_screen_name"},
            "text": "Hello World"
        }"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        let coords = raw.coordinates.as_ref().unwrap();
        assert_eq!(coords.longitude(), 100.0);
        assert_eq!(coords.latitude(), 45.0);
        assert_eq!(raw.user.as_ref().unwrap().screen_name.as_deref(), Some("user_screen_name"));
        assert_eq!(raw.text.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_wire_schema_accepts_null_coordinates() {
        let json = r#"{"coordinates": null, "user": {"name": "n", "screen_name": "s"}, "text": "t"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert!(!raw.has_coordinates());
    }

    #[test]
    fn test_wire_schema_tolerates_missing_fields() {
        let raw: RawEvent = serde_json::from_str("{}").unwrap();
        assert!(raw.coordinates.is_none());
        assert!(raw.user.is_none());
        assert!(raw.text.is_none());
    }

    #[test]
    fn test_terminal_kind_labels() {
        assert_eq!(TerminalKind::UnhandledException.as_label(), "unhandled_exception");
        assert_eq!(TerminalKind::BadStatusCode.as_label(), "bad_status_code");
        assert_eq!(TerminalKind::Timeout.as_label(), "timeout");
        assert_eq!(TerminalKind::Disconnected.as_label(), "disconnected");
        assert_eq!(TerminalKind::Warning.as_label(), "warning");
    }
}
