use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

///
/// Date
///
/// Calendar date stored as days since the Unix epoch.
///

#[derive(
    Clone, Copy, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    /// Build a date, clamping out-of-range month and day components into
    /// the nearest valid calendar date.
    #[must_use]
    pub fn new(y: i32, m: u32, d: u32) -> Self {
        let m = m.clamp(1, 12);

        let last_valid_day = (28..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(y, m, day).is_some());

        let Some(last_valid_day) = last_valid_day else {
            return Self::EPOCH;
        };

        let d = d.clamp(1, last_valid_day);

        match NaiveDate::from_ymd_opt(y, m, d) {
            Some(date) => Self::from_naive(date),
            None => Self::EPOCH,
        }
    }

    /// Fallible twin of `new`.
    #[must_use]
    pub fn new_checked(y: i32, m: u32, d: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(y, m, d).map(Self::from_naive)
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(Self::from_naive)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Year component (e.g. 2025).
    #[must_use]
    pub fn year(self) -> i32 {
        self.to_naive().year()
    }

    /// Month component (1-12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.to_naive().month()
    }

    /// Day-of-month component (1-31).
    #[must_use]
    pub fn day(self) -> u32 {
        self.to_naive().day()
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_naive(date: NaiveDate) -> Self {
        let days = date.signed_duration_since(NaiveDate::default()).num_days();

        Self(days as i32)
    }

    fn to_naive(self) -> NaiveDate {
        NaiveDate::default()
            .checked_add_signed(TimeDelta::days(i64::from(self.0)))
            .unwrap_or_default()
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format("%Y-%m-%d"))
    }
}

///
/// TESTS
///
