use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use num_traits::FromPrimitive;
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};

///
/// Decimal
///
/// Arbitrary-precision decimal operand value. Wraps `rust_decimal` and adds
/// the lenient-parse and normalization helpers the operand pipeline needs.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);
    pub const ONE: Self = Self(WrappedDecimal::ONE);
    pub const NEGATIVE_ONE: Self = Self(WrappedDecimal::NEGATIVE_ONE);

    /// 2^31, the inclusive bound for 32-bit integer operands.
    pub const INT32_BOUND: Self = Self(WrappedDecimal::from_parts(2_147_483_648, 0, 0, false, 0));

    /// 2^63 - 1, the inclusive bound for 64-bit integer operands.
    pub const INT64_BOUND: Self = Self(WrappedDecimal::from_parts(
        0xFFFF_FFFF,
        0x7FFF_FFFF,
        0,
        false,
        0,
    ));

    /// Construct from a mantissa and a power-of-ten scale.
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self(WrappedDecimal::from(n))
    }

    #[must_use]
    pub fn from_u64(n: u64) -> Self {
        Self(WrappedDecimal::from(n))
    }

    /// Lossy conversion from a binary float; `None` for NaN/infinite input.
    #[must_use]
    pub fn from_f64(n: f64) -> Option<Self> {
        WrappedDecimal::from_f64(n).map(Self)
    }

    /// Parse user text, defaulting to zero on empty or invalid input.
    ///
    /// This is the "never block typing" policy: a half-typed number must
    /// still produce a renderable operand.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.trim().parse().unwrap_or_default()
    }

    /// Drop any fractional part, keeping the sign.
    #[must_use]
    pub fn trunc(self) -> Self {
        Self(self.0.trunc())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Negation.
    #[must_use]
    pub fn neg(self) -> Self {
        Self(-self.0)
    }

    #[must_use]
    pub const fn get(self) -> WrappedDecimal {
        self.0
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(d: WrappedDecimal) -> Self {
        Self(d)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lenient_defaults_to_zero() {
        assert_eq!(Decimal::parse_lenient(""), Decimal::ZERO);
        assert_eq!(Decimal::parse_lenient("   "), Decimal::ZERO);
        assert_eq!(Decimal::parse_lenient("abc"), Decimal::ZERO);
        assert_eq!(Decimal::parse_lenient("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn parse_lenient_accepts_signed_decimals() {
        assert_eq!(Decimal::parse_lenient("150"), Decimal::from_i64(150));
        assert_eq!(Decimal::parse_lenient("-5"), Decimal::from_i64(-5));
        assert_eq!(Decimal::parse_lenient(" 2.75 "), Decimal::new(275, 2));
    }

    #[test]
    fn bounds_match_their_widths() {
        assert_eq!(
            Decimal::INT32_BOUND,
            Decimal::from_i64(2_147_483_648)
        );
        assert_eq!(
            Decimal::INT64_BOUND,
            Decimal::from_i64(i64::MAX)
        );
    }

    #[test]
    fn trunc_keeps_sign() {
        assert_eq!(Decimal::new(175, 2).trunc(), Decimal::from_i64(1));
        assert_eq!(Decimal::new(-175, 2).trunc(), Decimal::from_i64(-1));
    }

    #[test]
    fn no_precision_loss_round_trip() {
        let d: Decimal = "123456789.123456789".parse().unwrap();
        assert_eq!(d.to_string(), "123456789.123456789");
    }
}
