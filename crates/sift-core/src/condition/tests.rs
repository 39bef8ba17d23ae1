use super::*;

#[test]
fn round_trip_preserves_operator_and_operand() {
    let rhs = Rhs::scalar(Scalar::Decimal(Decimal::parse_lenient("150.25")));
    let condition = Condition::new(CompareOp::Eq, rhs.clone());

    assert_eq!(condition.op(), CompareOp::Eq);
    assert_eq!(condition.rhs(), &rhs);
}

#[test]
fn range_round_trip_keeps_bound_order() {
    let rhs = Rhs::range(
        Scalar::Decimal(Decimal::from_i64(10)),
        Scalar::Decimal(Decimal::from_i64(2)),
    );
    let condition = Condition::new(CompareOp::Between, rhs.clone());

    // Out-of-order bounds are representable; the engine treats them as a
    // no-match range.
    assert_eq!(condition.rhs(), &rhs);
}

#[test]
fn checked_rejects_a_pair_for_a_scalar_operator() {
    let rhs = Rhs::range(Scalar::text("a"), Scalar::text("b"));
    let err = Condition::checked(CompareOp::Eq, rhs).unwrap_err();

    assert_eq!(
        err,
        ConditionError::ArityMismatch {
            op: CompareOp::Eq,
            expected: OperandArity::One,
            found: OperandArity::Pair,
        }
    );
}

#[test]
fn checked_rejects_a_scalar_for_a_range_operator() {
    let rhs = Rhs::scalar(Scalar::text("a"));

    assert!(Condition::checked(CompareOp::NotBetween, rhs).is_err());
}

#[test]
#[should_panic(expected = "operand shape mismatch")]
fn new_fails_fast_on_arity_mismatch() {
    let _ = Condition::new(CompareOp::Between, Rhs::scalar(Scalar::Bool(true)));
}

#[test]
fn deserialization_re_runs_the_shape_check() {
    let json = serde_json::json!({
        "op": "Between",
        "rhs": { "One": { "Literal": { "Bool": true } } },
    });

    assert!(serde_json::from_value::<Condition>(json).is_err());
}

#[test]
fn field_ref_stores_path_and_label_by_value() {
    let operand = Operand::field_ref(Path::field("total"), "Total");

    assert_eq!(operand.referenced_path(), Some(&Path::field("total")));
    assert_eq!(
        Operand::literal(Scalar::Bool(true)).referenced_path(),
        None
    );
}

#[test]
fn conditions_serialize_for_the_wire() {
    let condition = Condition::new(
        CompareOp::Between,
        Rhs::range(
            Scalar::Timestamp(Timestamp::from_seconds(100)),
            Scalar::Timestamp(Timestamp::from_seconds(200)),
        ),
    );

    let json = serde_json::to_string(&condition).unwrap();
    let back: Condition = serde_json::from_str(&json).unwrap();

    assert_eq!(back, condition);
}
