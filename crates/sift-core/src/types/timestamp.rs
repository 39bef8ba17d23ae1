use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in seconds since the Unix epoch)
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms / 1_000)
    }

    /// Current wall-clock timestamp in seconds.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Parse an RFC 3339 string.
    #[must_use]
    pub fn parse_rfc3339(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.timestamp()))
    }

    /// Parse integer seconds first, then RFC 3339.
    #[must_use]
    pub fn parse_flexible(s: &str) -> Option<Self> {
        if let Ok(n) = s.trim().parse::<i64>() {
            return Some(Self(n));
        }

        Self::parse_rfc3339(s)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flexible_takes_integer_seconds_first() {
        assert_eq!(Timestamp::parse_flexible("1700000000"), Some(Timestamp::from_seconds(1_700_000_000)));
        assert_eq!(
            Timestamp::parse_flexible("1970-01-01T00:00:00Z"),
            Some(Timestamp::EPOCH)
        );
        assert_eq!(Timestamp::parse_flexible("not a time"), None);
    }

    #[test]
    fn millis_truncate_to_seconds() {
        assert_eq!(Timestamp::from_millis(1_999), Timestamp::from_seconds(1));
    }

    #[test]
    fn now_is_after_the_epoch() {
        assert!(Timestamp::now() > Timestamp::EPOCH);
    }
}
