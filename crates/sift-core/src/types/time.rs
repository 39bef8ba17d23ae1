use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

const SECS_PER_DAY: u32 = 86_400;

///
/// Time
///
/// Time of day stored as seconds since midnight, always `< 86_400`.
///

#[derive(
    Clone, Copy, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Time(u32);

impl Time {
    pub const MIDNIGHT: Self = Self(0);
    pub const MAX: Self = Self(SECS_PER_DAY - 1);

    /// Build a time of day, clamping each component into range.
    #[must_use]
    pub const fn new(h: u32, m: u32, s: u32) -> Self {
        let h = if h > 23 { 23 } else { h };
        let m = if m > 59 { 59 } else { m };
        let s = if s > 59 { 59 } else { s };

        Self(h * 3600 + m * 60 + s)
    }

    /// Build from a seconds-since-midnight count, clamping to the last
    /// second of the day.
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        if secs >= SECS_PER_DAY {
            Self::MAX
        } else {
            Self(secs)
        }
    }

    /// Parse an `HH:MM:SS` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .ok()
            .map(|t| Self(t.num_seconds_from_midnight()))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0 / 3600
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        (self.0 / 60) % 60
    }

    #[must_use]
    pub const fn second(self) -> u32 {
        self.0 % 60
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({self})")
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip() {
        let t = Time::new(13, 45, 30);

        assert_eq!(t.hour(), 13);
        assert_eq!(t.minute(), 45);
        assert_eq!(t.second(), 30);
        assert_eq!(t.to_string(), "13:45:30");
    }

    #[test]
    fn new_clamps_components() {
        assert_eq!(Time::new(24, 0, 0), Time::new(23, 0, 0));
        assert_eq!(Time::new(0, 99, 99), Time::new(0, 59, 59));
    }

    #[test]
    fn from_secs_clamps_to_end_of_day() {
        assert_eq!(Time::from_secs(86_400), Time::MAX);
        assert_eq!(Time::from_secs(0), Time::MIDNIGHT);
    }

    #[test]
    fn parse_accepts_iso_clock_strings() {
        assert_eq!(Time::parse("07:05:00"), Some(Time::new(7, 5, 0)));
        assert_eq!(Time::parse("7 o'clock"), None);
    }
}
