
use crate::types::Decimal;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Closed set of scalar field kinds a filter clause can bind to. Decimal
/// kinds also model float fields; `Other` is a foreign-key style reference
/// to another record type.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Bool,
    Date,
    Decimal,
    DecimalUnsigned,
    Int32,
    Int64,
    Nat32,
    Nat64,
    Other,
    Text,
    TextArea,
    TextLong,
    Time,
    Timestamp,
}

///
/// FieldCategory
///
/// Comparison category of a kind. Cross-field operand references are legal
/// only between fields of the same category.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldCategory {
    Bool,
    Date,
    Numeric,
    Other,
    Text,
    Time,
    Timestamp,
}

const TEXT_OPS: &[CompareOp] = &[
    CompareOp::Eq,
    CompareOp::Ne,
    CompareOp::Lt,
    CompareOp::Lte,
    CompareOp::Gt,
    CompareOp::Gte,
    CompareOp::Like,
    CompareOp::LikeCi,
    CompareOp::Between,
    CompareOp::NotBetween,
];

const RANGE_OPS: &[CompareOp] = &[
    CompareOp::Eq,
    CompareOp::Ne,
    CompareOp::Lt,
    CompareOp::Lte,
    CompareOp::Gt,
    CompareOp::Gte,
    CompareOp::Between,
    CompareOp::NotBetween,
];

const IDENTITY_OPS: &[CompareOp] = &[CompareOp::Eq, CompareOp::Ne];

impl FieldKind {
    /// Comparison category of this kind.
    #[must_use]
    pub const fn category(self) -> FieldCategory {
        match self {
            Self::Bool => FieldCategory::Bool,
            Self::Date => FieldCategory::Date,
            Self::Decimal | Self::DecimalUnsigned | Self::Int32 | Self::Int64 | Self::Nat32
            | Self::Nat64 => FieldCategory::Numeric,
            Self::Other => FieldCategory::Other,
            Self::Text | Self::TextArea | Self::TextLong => FieldCategory::Text,
            Self::Time => FieldCategory::Time,
            Self::Timestamp => FieldCategory::Timestamp,
        }
    }

    /// The legal operator set for this kind.
    #[must_use]
    pub const fn operators(self) -> &'static [CompareOp] {
        match self.category() {
            FieldCategory::Text => TEXT_OPS,
            FieldCategory::Numeric
            | FieldCategory::Date
            | FieldCategory::Time
            | FieldCategory::Timestamp => RANGE_OPS,
            FieldCategory::Bool | FieldCategory::Other => IDENTITY_OPS,
        }
    }

    /// True if `op` is legal for this kind.
    #[must_use]
    pub fn supports(self, op: CompareOp) -> bool {
        self.operators().contains(&op)
    }

    /// True for the string-like kinds.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self.category(), FieldCategory::Text)
    }

    /// True for the numeric kinds (including `Other` identifiers).
    #[must_use]
    pub const fn is_numeric_input(self) -> bool {
        matches!(self.category(), FieldCategory::Numeric | FieldCategory::Other)
    }

    /// Default sort direction when a field is first added to the ordering:
    /// ascending for string-like fields, descending otherwise.
    #[must_use]
    pub const fn default_descending(self) -> bool {
        !self.is_text()
    }

    /// Normalize raw user text into a decimal operand for this kind.
    ///
    /// Invalid or empty input parses to zero (`-1` for `Other` identifiers,
    /// whose convention reserves negative values for "unset"). Integer kinds
    /// truncate any fractional part and clamp to their bit-width bounds;
    /// unsigned decimals take the absolute value instead of clamping.
    ///
    /// Calling this on a non-numeric kind is a caller bug.
    #[must_use]
    pub fn normalize_decimal(self, raw: &str) -> Decimal {
        match self {
            Self::Int32 => Decimal::parse_lenient(raw)
                .trunc()
                .clamp(Decimal::INT32_BOUND.neg(), Decimal::INT32_BOUND),
            Self::Nat32 => Decimal::parse_lenient(raw)
                .trunc()
                .clamp(Decimal::ZERO, Decimal::INT32_BOUND),
            Self::Int64 => Decimal::parse_lenient(raw)
                .trunc()
                .clamp(Decimal::INT64_BOUND.neg(), Decimal::INT64_BOUND),
            Self::Nat64 => Decimal::parse_lenient(raw)
                .trunc()
                .clamp(Decimal::ZERO, Decimal::INT64_BOUND),
            Self::Decimal => Decimal::parse_lenient(raw),
            Self::DecimalUnsigned => Decimal::parse_lenient(raw).abs(),
            Self::Other => raw.trim().parse().unwrap_or(Decimal::NEGATIVE_ONE),

            Self::Bool | Self::Date | Self::Text | Self::TextArea | Self::TextLong
            | Self::Time | Self::Timestamp => {
                panic!("numeric normalization applied to non-numeric kind {self}")
            }
        }
    }
}

///
/// CompareOp
///
/// Closed comparison-operator set. `Like`/`LikeCi` are the case-sensitive
/// and case-insensitive pattern matches; `Between`/`NotBetween` take an
/// ordered operand pair, everything else a single operand.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum CompareOp {
    Between,
    Eq,
    Gt,
    Gte,
    Like,
    LikeCi,
    Lt,
    Lte,
    Ne,
    NotBetween,
}

impl CompareOp {
    /// Operand shape this operator takes.
    #[must_use]
    pub const fn arity(self) -> OperandArity {
        match self {
            Self::Between | Self::NotBetween => OperandArity::Pair,
            Self::Eq | Self::Gt | Self::Gte | Self::Like | Self::LikeCi | Self::Lt
            | Self::Lte | Self::Ne => OperandArity::One,
        }
    }
}

///
/// OperandArity
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum OperandArity {
    One,
    Pair,
}
