use crate::{FieldNode, NodeKind, RecordSchema, SchemaError, inspect};
use sift_core::{
    field::FieldKind,
    path::{Nesting, Path, Step},
};

fn invoice_schema() -> RecordSchema {
    RecordSchema::new(
        "invoice",
        vec![
            FieldNode::scalar("number", FieldKind::Text),
            FieldNode::scalar("amount", FieldKind::Decimal),
            FieldNode::reference("customer", "customer", "Customer"),
            FieldNode::record(
                "shipping",
                vec![
                    FieldNode::scalar("city", FieldKind::Text),
                    FieldNode::scalar("express", FieldKind::Bool),
                ],
            ),
            FieldNode::list(
                "lines",
                NodeKind::Record(vec![
                    FieldNode::scalar("sku", FieldKind::Text),
                    FieldNode::scalar("quantity", FieldKind::Nat32),
                ]),
            ),
        ],
    )
    .unwrap()
}

#[test]
fn inspect_enumerates_every_scalar_leaf_in_order() {
    let templates = inspect(&invoice_schema());

    let labels: Vec<_> = templates.iter().map(|fp| fp.label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            "number",
            "amount",
            "customer",
            "shipping.city",
            "shipping.express",
            "lines.sku",
            "lines.quantity",
        ]
    );

    assert!(templates.iter().all(|fp| fp.condition.is_none() && !fp.active));
}

#[test]
fn nested_records_extend_the_path() {
    let templates = inspect(&invoice_schema());

    let city = templates.iter().find(|fp| fp.label == "shipping.city").unwrap();
    assert_eq!(
        city.path,
        Path::new(vec![Step::field("shipping"), Step::field("city")])
    );
    assert_eq!(city.kind, FieldKind::Text);
}

#[test]
fn arrays_record_an_any_element_step() {
    let templates = inspect(&invoice_schema());

    let sku = templates.iter().find(|fp| fp.label == "lines.sku").unwrap();
    assert_eq!(
        sku.path,
        Path::new(vec![Step::list("lines"), Step::field("sku")])
    );
    assert_eq!(
        sku.path.steps()[0].nesting,
        Nesting::List { index: None }
    );
    assert!(sku.path.steps()[0].nesting.is_list());
    assert!(!sku.path.steps()[1].nesting.is_list());
}

#[test]
fn a_scalar_array_keeps_the_leaf_on_the_list_step() {
    let schema = RecordSchema::new(
        "note",
        vec![FieldNode::list("tags", NodeKind::Scalar(FieldKind::Text))],
    )
    .unwrap();

    let templates = inspect(&schema);

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].path, Path::new(vec![Step::list("tags")]));
}

#[test]
fn references_become_other_templates_with_a_descriptor() {
    let templates = inspect(&invoice_schema());

    let customer = templates.iter().find(|fp| fp.label == "customer").unwrap();
    assert_eq!(customer.kind, FieldKind::Other);

    let reference = customer.reference.as_ref().unwrap();
    assert_eq!(reference.record, "customer");
    assert_eq!(reference.label, "Customer");
}

#[test]
fn path_identity_is_stable_across_inspections() {
    let schema = invoice_schema();

    let first = inspect(&schema);
    let second = inspect(&schema);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert!(a.same_path(b));
    }
}

#[test]
fn duplicate_field_names_are_rejected() {
    let err = RecordSchema::new(
        "invoice",
        vec![
            FieldNode::scalar("amount", FieldKind::Decimal),
            FieldNode::scalar("amount", FieldKind::Int32),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err,
        SchemaError::DuplicateField {
            record: "invoice".to_string(),
            field: "amount".to_string(),
        }
    );
}

#[test]
fn nested_duplicates_are_rejected_too() {
    let err = RecordSchema::new(
        "invoice",
        vec![FieldNode::record(
            "shipping",
            vec![
                FieldNode::scalar("city", FieldKind::Text),
                FieldNode::scalar("city", FieldKind::Text),
            ],
        )],
    )
    .unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateField { .. }));
}

#[test]
fn empty_field_names_are_rejected() {
    let err = RecordSchema::new("invoice", vec![FieldNode::scalar("", FieldKind::Text)])
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::EmptyFieldName {
            record: "invoice".to_string(),
        }
    );
}

#[test]
fn schemas_round_trip_through_serde() {
    let schema = invoice_schema();

    let json = serde_json::to_string(&schema).unwrap();
    let back: RecordSchema = serde_json::from_str(&json).unwrap();

    assert_eq!(back, schema);
}
