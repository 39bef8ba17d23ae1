use crate::{
    condition::{Condition, ConditionError, Rhs},
    field::{CompareOp, FieldKind},
    path::Path,
};
use serde::{Deserialize, Serialize};

///
/// SortKey
///
/// Optional ordering tuple on a clause. Priorities across one filter form
/// a dense `1..=N` sequence.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SortKey {
    pub priority: u32,
    pub descending: bool,
}

///
/// OtherRef
///
/// Auxiliary descriptor for `Other`-kinded fields: which record type the
/// field references, plus a display label for the picker.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct OtherRef {
    pub record: String,
    pub label: String,
}

impl OtherRef {
    #[must_use]
    pub fn new(record: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            label: label.into(),
        }
    }
}

///
/// FilterPath
///
/// One addressable filter clause: a path into the record schema plus an
/// optional typed condition, an active flag, and an optional sort key.
///
/// Identity is the path alone; label, condition, active flag, and sort
/// key are all payload. That lets a live clause be matched against its
/// template ("the same field, possibly with a different condition").
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterPath {
    pub label: String,
    pub path: Path,
    pub kind: FieldKind,
    pub condition: Option<Condition>,
    pub active: bool,
    pub sort: Option<SortKey>,
    pub reference: Option<OtherRef>,
}

impl FilterPath {
    /// A condition-free template: "available but unset".
    #[must_use]
    pub fn template(label: impl Into<String>, path: Path, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            path,
            kind,
            condition: None,
            active: false,
            sort: None,
            reference: None,
        }
    }

    /// Attach the auxiliary record descriptor for an `Other` field.
    #[must_use]
    pub fn with_reference(mut self, reference: OtherRef) -> Self {
        self.reference = Some(reference);

        self
    }

    /// Build a live, active clause in one step. Panics if the operator is
    /// not legal for the kind or the operand shape does not match its
    /// arity. Both are caller bugs, not user input.
    #[must_use]
    pub fn with_condition(
        label: impl Into<String>,
        path: Path,
        kind: FieldKind,
        op: CompareOp,
        rhs: Rhs,
    ) -> Self {
        match Self::checked_condition(label, path, kind, op, rhs) {
            Ok(fp) => fp,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of `with_condition`.
    pub fn checked_condition(
        label: impl Into<String>,
        path: Path,
        kind: FieldKind,
        op: CompareOp,
        rhs: Rhs,
    ) -> Result<Self, ConditionError> {
        if !kind.supports(op) {
            return Err(ConditionError::UnsupportedOperator { kind, op });
        }

        let condition = Condition::checked(op, rhs)?;

        Ok(Self {
            condition: Some(condition),
            active: true,
            ..Self::template(label, path, kind)
        })
    }

    /// Replace the condition, activating the clause.
    #[must_use]
    pub fn set_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self.active = true;

        self
    }

    /// Drop the condition, returning to the template state.
    #[must_use]
    pub fn clear_condition(mut self) -> Self {
        self.condition = None;
        self.active = false;

        self
    }

    /// Flip the active flag without touching operator or operand.
    #[must_use]
    pub fn set_active(mut self, active: bool) -> Self {
        self.active = active;

        self
    }

    /// Identity check: same path, regardless of label/condition/active.
    #[must_use]
    pub fn same_path(&self, other: &Self) -> bool {
        self.path == other.path
    }

    /// True if a condition is attached (active or not).
    #[must_use]
    pub const fn has_condition(&self) -> bool {
        self.condition.is_some()
    }

    /// True if this clause contributes to the query: active with a
    /// condition attached.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.active && self.condition.is_some()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Scalar;
    use crate::types::Decimal;

    fn amount_eq_150() -> FilterPath {
        FilterPath::with_condition(
            "Amount",
            Path::field("amount"),
            FieldKind::Int32,
            CompareOp::Eq,
            Rhs::scalar(Scalar::Decimal(Decimal::from_i64(150))),
        )
    }

    #[test]
    fn identity_is_the_path_alone() {
        let template = FilterPath::template("Amount!", Path::field("amount"), FieldKind::Int32);
        let live = amount_eq_150();

        assert!(template.same_path(&live));
        assert_ne!(template, live);
    }

    #[test]
    fn toggle_is_idempotent_and_preserves_the_condition() {
        let fp = amount_eq_150();
        let original = fp.clone();

        let toggled = fp.set_active(true).set_active(false);

        assert!(!toggled.active);
        assert_eq!(toggled.condition, original.condition);
        assert_eq!(toggled.set_active(true), original);
    }

    #[test]
    fn template_then_set_condition_matches_one_step_construction() {
        let condition = Condition::new(
            CompareOp::Eq,
            Rhs::scalar(Scalar::Decimal(Decimal::from_i64(150))),
        );
        let staged = FilterPath::template("Amount", Path::field("amount"), FieldKind::Int32)
            .set_condition(condition);

        assert_eq!(staged, amount_eq_150());
    }

    #[test]
    fn clear_condition_returns_to_the_template_state() {
        let cleared = amount_eq_150().clear_condition();

        assert_eq!(
            cleared,
            FilterPath::template("Amount", Path::field("amount"), FieldKind::Int32)
        );
    }

    #[test]
    #[should_panic(expected = "not legal")]
    fn unsupported_operator_fails_fast() {
        let _ = FilterPath::with_condition(
            "Active",
            Path::field("active"),
            FieldKind::Bool,
            CompareOp::Lt,
            Rhs::scalar(Scalar::Bool(true)),
        );
    }

    #[test]
    fn other_fields_carry_their_record_descriptor() {
        let fp = FilterPath::template("Customer", Path::field("customer_id"), FieldKind::Other)
            .with_reference(OtherRef::new("customer", "Customer"));

        assert_eq!(fp.reference.unwrap().record, "customer");
    }
}
