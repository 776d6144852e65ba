//! # Validated event record.
//!
//! [`GeoTweet`] is the immutable value object observers work with. It is
//! derived per observer invocation from a [`RawEvent`] and discarded right
//! after formatting or plotting. Construction is the validation step: a
//! `RawEvent` missing any required field, or carrying an out-of-range
//! coordinate, does not convert.

use crate::error::ObserverError;
use crate::feed::RawEvent;

/// Validated, immutable record derived from a [`RawEvent`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeoTweet {
    pub longitude: f64,
    pub latitude: f64,
    pub user_name: String,
    pub user_screen_name: String,
    pub text: String,
}

impl TryFrom<&RawEvent> for GeoTweet {
    type Error = ObserverError;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        let coords = raw
            .coordinates
            .as_ref()
            .ok_or_else(|| ObserverError::malformed("missing coordinates"))?;
        let longitude = coords.longitude();
        let latitude = coords.latitude();
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ObserverError::malformed(format!(
                "longitude {longitude} out of range"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ObserverError::malformed(format!(
                "latitude {latitude} out of range"
            )));
        }

        let user = raw
            .user
            .as_ref()
            .ok_or_else(|| ObserverError::malformed("missing user"))?;
        let user_name = user
            .name
            .clone()
            .ok_or_else(|| ObserverError::malformed("missing user name"))?;
        let user_screen_name = user
            .screen_name
            .clone()
            .ok_or_else(|| ObserverError::malformed("missing user screen name"))?;
        let text = raw
            .text
            .clone()
            .ok_or_else(|| ObserverError::malformed("missing text"))?;

        Ok(GeoTweet {
            longitude,
            latitude,
            user_name,
            user_screen_name,
            text,
        })
    }
}
