//! # Formatting strategies for console output.
//!
//! [`ConsoleObserver`](crate::ConsoleObserver) renders a tweet through a
//! [`Format`] strategy before writing it to its sink. The module can be
//! extended with other formatters; they only need to implement `format()`
//! over a [`GeoTweet`].
//!
//! Formatters do no validation. By the time one runs, the observer has
//! already derived a valid [`GeoTweet`].

use crate::tweet::GeoTweet;

/// Stateless formatting strategy: tweet in, text out.
///
/// Implementations must be pure; two calls with the same tweet yield the
/// same text.
pub trait Format: Send {
    /// Builds a string representation of a tweet.
    fn format(&self, tweet: &GeoTweet) -> String;
}

/// Creates simple string representations of tweets.
///
/// Output ends with the template's own trailing blank line; the observer
/// writes it verbatim with no added separators.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleFormatter;

impl Format for SimpleFormatter {
    fn format(&self, tweet: &GeoTweet) -> String {
        format!(
            "User: @{screen_name} ({name})\n\
             Location: {longitude} longitude, {latitude} latitude\n\
             Tweet: {text}\n\n",
            screen_name = tweet.user_screen_name,
            name = tweet.user_name,
            longitude = tweet.longitude,
            latitude = tweet.latitude,
            text = tweet.text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tweet() -> GeoTweet {
        GeoTweet {
            longitude: 100.0,
            latitude: 45.0,
            user_name: "user_name".into(),
            user_screen_name: "user_screen_name".into(),
            text: "Hello World".into(),
        }
    }

    #[test]
    fn test_simple_formatter_template() {
        let formatted = SimpleFormatter.format(&sample_tweet());
        let expected = "User: @user_screen_name (user_name)\n\
                        Location: 100 longitude, 45 latitude\n\
                        Tweet: Hello World\n\n";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_format_is_pure() {
        let tweet = sample_tweet();
        assert_eq!(SimpleFormatter.format(&tweet), SimpleFormatter.format(&tweet));
    }

    #[test]
    fn test_fractional_coordinates_keep_their_precision() {
        let mut tweet = sample_tweet();
        tweet.longitude = -0.1275;
        tweet.latitude = 51.5072;
        let formatted = SimpleFormatter.format(&tweet);
        assert!(formatted.contains("Location: -0.1275 longitude, 51.5072 latitude\n"));
    }
}
