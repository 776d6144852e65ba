//! # Subscription filter configuration.
//!
//! [`BoundingBox`] is the geographic window the feed subscription is
//! filtered by. It is validated once at startup, before any connection
//! attempt, and immutable afterwards.
//!
//! # Example
//! ```
//! use geotweet::BoundingBox;
//!
//! let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
//! assert_eq!(bbox.as_filter(), [-10.0, -5.0, 10.0, 5.0]);
//!
//! // min above max is rejected before anything connects.
//! assert!(BoundingBox::new(10.0, 0.0, 5.0, 0.0).is_err());
//! ```

use crate::error::ConfigError;

/// Longitude bound of the world, degrees.
pub const MAX_LONGITUDE: f64 = 180.0;
/// Latitude bound of the world, degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Validated geographic window for the feed subscription.
///
/// Invariant: `-180 <= min_long <= max_long <= 180` and
/// `-90 <= min_lat <= max_lat <= 90`. Only constructible through
/// [`BoundingBox::new`], so a held value is always valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min_long: f64,
    min_lat: f64,
    max_long: f64,
    max_lat: f64,
}

impl BoundingBox {
    /// Validates the bounds and builds the box.
    ///
    /// Rejects any coordinate outside [-180, 180] / [-90, 90] and any
    /// minimum above its maximum. NaN fails the ordered comparisons and is
    /// rejected as well.
    pub fn new(min_long: f64, min_lat: f64, max_long: f64, max_lat: f64) -> Result<Self, ConfigError> {
        let long_ok = -MAX_LONGITUDE <= min_long && min_long <= max_long && max_long <= MAX_LONGITUDE;
        let lat_ok = -MAX_LATITUDE <= min_lat && min_lat <= max_lat && max_lat <= MAX_LATITUDE;
        if !(long_ok && lat_ok) {
            return Err(ConfigError::InvalidBoundingBox {
                min_long,
                min_lat,
                max_long,
                max_lat,
            });
        }
        Ok(Self {
            min_long,
            min_lat,
            max_long,
            max_lat,
        })
    }

    /// The whole world.
    pub fn world() -> Self {
        Self {
            min_long: -MAX_LONGITUDE,
            min_lat: -MAX_LATITUDE,
            max_long: MAX_LONGITUDE,
            max_lat: MAX_LATITUDE,
        }
    }

    /// Returns the box in subscription-filter order:
    /// `[min_long, min_lat, max_long, max_lat]`.
    pub fn as_filter(&self) -> [f64; 4] {
        [self.min_long, self.min_lat, self.max_long, self.max_lat]
    }

    /// True when the point falls inside the box (bounds inclusive).
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        self.min_long <= longitude
            && longitude <= self.max_long
            && self.min_lat <= latitude
            && latitude <= self.max_lat
    }

    pub fn min_long(&self) -> f64 {
        self.min_long
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_long(&self) -> f64 {
        self.max_long
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::world()
    }
}
