//! # Console observer.
//!
//! Renders tweets on the terminal: derives a [`GeoTweet`] from the raw
//! event, formats it through the configured [`Format`] strategy, and writes
//! the text verbatim to the sink. Nothing is written when validation or
//! formatting fails; the dispatching set logs the failure.

use std::io::Write;

use crate::error::ObserverError;
use crate::feed::RawEvent;
use crate::format::Format;
use crate::tweet::GeoTweet;

use super::Observe;

/// Renders tweets on a text sink, stdout by default.
///
/// Generic over the sink so tests can capture output in a buffer.
pub struct ConsoleObserver<W: Write + Send> {
    formatter: Box<dyn Format>,
    sink: W,
}

impl ConsoleObserver<std::io::Stdout> {
    /// Creates a console observer writing to stdout.
    pub fn stdout(formatter: impl Format + 'static) -> Self {
        Self::with_sink(formatter, std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleObserver<W> {
    /// Creates a console observer writing to the given sink.
    pub fn with_sink(formatter: impl Format + 'static, sink: W) -> Self {
        Self {
            formatter: Box::new(formatter),
            sink,
        }
    }
}

impl<W: Write + Send> Observe for ConsoleObserver<W> {
    fn update(&mut self, raw: &RawEvent) -> Result<(), ObserverError> {
        let tweet = GeoTweet::try_from(raw)?;
        let formatted = self.formatter.format(&tweet);
        // Verbatim: the template carries its own trailing blank line.
        self.sink.write_all(formatted.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Author, CoordinatePair};
    use crate::format::SimpleFormatter;

    fn sample_raw() -> RawEvent {
        RawEvent {
            coordinates: Some(CoordinatePair {
                coordinates: [100.0, 45.0],
            }),
            user: Some(Author {
                name: Some("user_name".into()),
                screen_name: Some("user_screen_name".into()),
            }),
            text: Some("Hello World".into()),
        }
    }

    /// Pipe-separated stub, optionally failing, mirroring a broken strategy.
    struct StubFormatter {
        with_panic: bool,
    }

    impl Format for StubFormatter {
        fn format(&self, tweet: &GeoTweet) -> String {
            assert!(!self.with_panic, "stub formatter failure");
            format!(
                "{}|{}|{}|{}|{}",
                tweet.longitude, tweet.latitude, tweet.user_name, tweet.user_screen_name, tweet.text
            )
        }
    }

    #[test]
    fn test_update_writes_formatted_tweet() {
        let mut obs = ConsoleObserver::with_sink(StubFormatter { with_panic: false }, Vec::new());
        obs.update(&sample_raw()).unwrap();
        assert_eq!(
            String::from_utf8(obs.sink.clone()).unwrap(),
            "100|45|user_name|user_screen_name|Hello World"
        );
    }

    #[test]
    fn test_update_uses_simple_formatter_verbatim() {
        let mut obs = ConsoleObserver::with_sink(SimpleFormatter, Vec::new());
        obs.update(&sample_raw()).unwrap();
        let written = String::from_utf8(obs.sink.clone()).unwrap();
        assert_eq!(
            written,
            "User: @user_screen_name (user_name)\n\
             Location: 100 longitude, 45 latitude\n\
             Tweet: Hello World\n\n"
        );
    }

    #[test]
    fn test_malformed_event_writes_nothing() {
        let mut raw = sample_raw();
        raw.user = None;
        let mut obs = ConsoleObserver::with_sink(SimpleFormatter, Vec::new());
        let err = obs.update(&raw).unwrap_err();
        assert_eq!(err.as_label(), "observer_malformed_event");
        assert!(obs.sink.is_empty());
    }
}
