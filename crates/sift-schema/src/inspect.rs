use crate::node::{FieldNode, NodeKind, RecordSchema};
use sift_core::{
    field::FieldKind,
    filter_path::{FilterPath, OtherRef},
    path::{Nesting, Path, Step},
};

/// Enumerate the universe of available clause templates for a record
/// type: one condition-free `FilterPath` per reachable scalar leaf, in
/// schema declaration order.
///
/// Array traversal is recorded as a list step with no element index
/// ("any element"); reference fields become `Other`-kinded templates
/// carrying their record descriptor. Labels are the dotted field names.
#[must_use]
pub fn inspect(schema: &RecordSchema) -> Vec<FilterPath> {
    let mut templates = Vec::new();

    walk_fields(&schema.fields, &Path::default(), "", &mut templates);

    templates
}

fn walk_fields(fields: &[FieldNode], prefix: &Path, label: &str, out: &mut Vec<FilterPath>) {
    for field in fields {
        walk_field(&field.name, &field.kind, Nesting::Field, prefix, label, out);
    }
}

fn walk_field(
    name: &str,
    kind: &NodeKind,
    nesting: Nesting,
    prefix: &Path,
    label: &str,
    out: &mut Vec<FilterPath>,
) {
    match kind {
        NodeKind::Scalar(scalar) => {
            let path = prefix.join(Step {
                name: name.to_string(),
                nesting,
            });

            out.push(FilterPath::template(join_label(label, name), path, *scalar));
        }
        NodeKind::Reference { record, label: display } => {
            let path = prefix.join(Step {
                name: name.to_string(),
                nesting,
            });

            out.push(
                FilterPath::template(join_label(label, name), path, FieldKind::Other)
                    .with_reference(OtherRef::new(record.clone(), display.clone())),
            );
        }
        NodeKind::Record(fields) => {
            let path = prefix.join(Step {
                name: name.to_string(),
                nesting,
            });

            walk_fields(fields, &path, &join_label(label, name), out);
        }
        // An array contributes its nesting to the step the inner shape
        // lands on; nested arrays collapse onto the same step.
        NodeKind::List(inner) => {
            walk_field(name, inner, Nesting::List { index: None }, prefix, label, out);
        }
    }
}

fn join_label(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
