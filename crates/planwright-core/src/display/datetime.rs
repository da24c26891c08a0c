//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Plans store UTC timestamps; this wrapper is only used for human-readable
/// output, never for the JSON export.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = LocalDateTime(&ts).to_string();

        let mut parts = output.splitn(3, ' ');
        let date = parts.next().unwrap();
        let time = parts.next().unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(time.len(), 8);
        assert!(parts.next().is_some_and(|tz| !tz.is_empty()));
    }
}
