#[cfg(test)]
mod tests;

use crate::{
    field::{CompareOp, FieldKind, OperandArity},
    path::Path,
    types::{Date, Decimal, Time, Timestamp},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Scalar
///
/// Literal operand value.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Scalar {
    Bool(bool),
    Date(Date),
    Decimal(Decimal),
    Text(String),
    Time(Time),
    Timestamp(Timestamp),
}

impl Scalar {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

///
/// Operand
///
/// One operand position: a literal value, or a reference to another field
/// of the same category. A reference stores only the referenced path plus
/// a display label; it is resolved against the template list by the
/// consuming engine, and a dangling reference simply matches nothing.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Operand {
    FieldRef { path: Path, label: String },
    Literal(Scalar),
}

impl Operand {
    #[must_use]
    pub const fn literal(scalar: Scalar) -> Self {
        Self::Literal(scalar)
    }

    #[must_use]
    pub fn field_ref(path: Path, label: impl Into<String>) -> Self {
        Self::FieldRef {
            path,
            label: label.into(),
        }
    }

    /// The referenced path, when this operand is a cross-field reference.
    #[must_use]
    pub const fn referenced_path(&self) -> Option<&Path> {
        match self {
            Self::FieldRef { path, .. } => Some(path),
            Self::Literal(_) => None,
        }
    }
}

///
/// Rhs
///
/// Operand shape: one operand for scalar operators, an ordered pair for
/// range operators. The pair carries `(first, second)` as supplied; no
/// `first <= second` invariant is enforced, an out-of-order range is
/// renderable and matches nothing.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Rhs {
    One(Operand),
    Pair(Operand, Operand),
}

impl Rhs {
    #[must_use]
    pub const fn arity(&self) -> OperandArity {
        match self {
            Self::One(_) => OperandArity::One,
            Self::Pair(..) => OperandArity::Pair,
        }
    }

    /// Single-literal convenience.
    #[must_use]
    pub const fn scalar(value: Scalar) -> Self {
        Self::One(Operand::Literal(value))
    }

    /// Literal-pair convenience for range operators.
    #[must_use]
    pub const fn range(first: Scalar, second: Scalar) -> Self {
        Self::Pair(Operand::Literal(first), Operand::Literal(second))
    }
}

///
/// ConditionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("operand shape mismatch for {op}: expected {expected}, got {found}")]
    ArityMismatch {
        op: CompareOp,
        expected: OperandArity,
        found: OperandArity,
    },

    #[error("operator {op} is not legal for {kind} fields")]
    UnsupportedOperator { kind: FieldKind, op: CompareOp },
}

///
/// Condition
///
/// One typed operator + operand clause. The operand shape always matches
/// the operator's arity; `new` fails fast on a mismatch, `checked` is the
/// fallible twin.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "ConditionParts")]
pub struct Condition {
    op: CompareOp,
    rhs: Rhs,
}

/// Raw wire shape; deserialization re-runs the shape check so a decoded
/// condition upholds the same invariant as a constructed one.
#[derive(Deserialize)]
struct ConditionParts {
    op: CompareOp,
    rhs: Rhs,
}

impl TryFrom<ConditionParts> for Condition {
    type Error = ConditionError;

    fn try_from(parts: ConditionParts) -> Result<Self, Self::Error> {
        Self::checked(parts.op, parts.rhs)
    }
}

impl Condition {
    /// Build a condition, panicking if the operand shape does not match
    /// the operator arity. A mismatch is a caller bug, not user input.
    #[must_use]
    pub fn new(op: CompareOp, rhs: Rhs) -> Self {
        match Self::checked(op, rhs) {
            Ok(condition) => condition,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of `new`.
    pub fn checked(op: CompareOp, rhs: Rhs) -> Result<Self, ConditionError> {
        if rhs.arity() != op.arity() {
            return Err(ConditionError::ArityMismatch {
                op,
                expected: op.arity(),
                found: rhs.arity(),
            });
        }

        Ok(Self { op, rhs })
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn rhs(&self) -> &Rhs {
        &self.rhs
    }
}
