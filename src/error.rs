//! Error types used by the geotweet pipeline.
//!
//! This module defines three error enums:
//!
//! - [`ConfigError`] — startup validation failures (rejected before any
//!   connection attempt).
//! - [`ObserverError`] — per-event failures inside a single observer,
//!   isolated at the dispatch boundary and never propagated past it.
//! - [`FeedError`] — failures opening the feed subscription.
//!
//! All types provide `as_label()` helpers producing short stable
//! snake_case labels for logs.

use thiserror::Error;

/// # Startup configuration errors.
///
/// Raised while validating user input, before any external resource is
/// acquired. A program that fails here never subscribes to the feed.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A coordinate bound falls outside the valid longitude/latitude ranges,
    /// or a minimum exceeds its maximum.
    #[error(
        "invalid bounding box: ensure that \
         -180 <= MIN_LONG <= MAX_LONG <= 180 and that \
         -90 <= MIN_LAT <= MAX_LAT <= 90 (got [{min_long}, {min_lat}, {max_long}, {max_lat}])"
    )]
    InvalidBoundingBox {
        min_long: f64,
        min_lat: f64,
        max_long: f64,
        max_lat: f64,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::InvalidBoundingBox { .. } => "config_invalid_bounding_box",
        }
    }
}

/// # Per-observer, per-event errors.
///
/// These stay inside the dispatch loop: the [`ObserverSet`](crate::ObserverSet)
/// catches them at the call site, logs them, and moves on to the next
/// observer. They never reach the stream listener or the feed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ObserverError {
    /// The inbound event is missing a field required to build a
    /// [`GeoTweet`](crate::GeoTweet), or carries an out-of-range coordinate.
    #[error("malformed event: {detail}")]
    MalformedEvent { detail: String },

    /// Writing the formatted text to the observer's sink failed.
    #[error("sink write failed: {source}")]
    Sink {
        #[from]
        source: std::io::Error,
    },

    /// Projection, plotting, or redraw on the render surface failed.
    #[error("render failed: {detail}")]
    Render { detail: String },
}

impl ObserverError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::MalformedEvent { .. } => "observer_malformed_event",
            ObserverError::Sink { .. } => "observer_sink_failed",
            ObserverError::Render { .. } => "observer_render_failed",
        }
    }

    /// Shorthand for an [`ObserverError::MalformedEvent`] with the given detail.
    pub fn malformed(detail: impl Into<String>) -> Self {
        ObserverError::MalformedEvent {
            detail: detail.into(),
        }
    }

    /// Shorthand for an [`ObserverError::Render`] with the given detail.
    pub fn render(detail: impl Into<String>) -> Self {
        ObserverError::Render {
            detail: detail.into(),
        }
    }
}

/// # Errors opening the feed subscription.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FeedError {
    /// The subscription could not be opened.
    #[error("failed to open feed subscription: {detail}")]
    Subscribe { detail: String },
}

impl FeedError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedError::Subscribe { .. } => "feed_subscribe_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let e = ConfigError::InvalidBoundingBox {
            min_long: 10.0,
            min_lat: 0.0,
            max_long: 5.0,
            max_lat: 0.0,
        };
        assert_eq!(e.as_label(), "config_invalid_bounding_box");
        assert_eq!(
            ObserverError::malformed("x").as_label(),
            "observer_malformed_event"
        );
        assert_eq!(
            ObserverError::render("x").as_label(),
            "observer_render_failed"
        );
        assert_eq!(
            FeedError::Subscribe { detail: "x".into() }.as_label(),
            "feed_subscribe_failed"
        );
    }

    #[test]
    fn test_bounding_box_error_message_names_both_axes() {
        let e = ConfigError::InvalidBoundingBox {
            min_long: 10.0,
            min_lat: -91.0,
            max_long: 5.0,
            max_lat: 0.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("-180 <= MIN_LONG <= MAX_LONG <= 180"));
        assert!(msg.contains("-90 <= MIN_LAT <= MAX_LAT <= 90"));
    }
}
