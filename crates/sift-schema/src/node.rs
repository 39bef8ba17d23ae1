use serde::{Deserialize, Serialize};
use sift_core::field::FieldKind;
use thiserror::Error as ThisError;

///
/// NodeKind
///
/// Shape of one schema field: a scalar leaf, a nested record, an array of
/// some inner shape, or a reference to another record type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum NodeKind {
    List(Box<NodeKind>),
    Record(Vec<FieldNode>),
    Reference { record: String, label: String },
    Scalar(FieldKind),
}

///
/// FieldNode
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldNode {
    pub name: String,
    pub kind: NodeKind,
}

impl FieldNode {
    #[must_use]
    pub fn scalar(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Scalar(kind),
        }
    }

    #[must_use]
    pub fn record(name: impl Into<String>, fields: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Record(fields),
        }
    }

    #[must_use]
    pub fn list(name: impl Into<String>, inner: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::List(Box::new(inner)),
        }
    }

    #[must_use]
    pub fn reference(
        name: impl Into<String>,
        record: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Reference {
                record: record.into(),
                label: label.into(),
            },
        }
    }
}

///
/// SchemaError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("record {record} declares field {field} more than once")]
    DuplicateField { record: String, field: String },

    #[error("record {record} declares a field with an empty name")]
    EmptyFieldName { record: String },
}

///
/// RecordSchema
///
/// One record type's field tree, as reported by the surrounding
/// application's schema source. Field names are unique per nesting level;
/// path identity derived from a validated schema is stable across calls.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldNode>,
}

impl RecordSchema {
    /// Build a schema, rejecting duplicate or empty field names at every
    /// nesting level.
    pub fn new(name: impl Into<String>, fields: Vec<FieldNode>) -> Result<Self, SchemaError> {
        let name = name.into();
        validate_fields(&name, &fields)?;

        Ok(Self { name, fields })
    }
}

fn validate_fields(record: &str, fields: &[FieldNode]) -> Result<(), SchemaError> {
    let mut seen = Vec::with_capacity(fields.len());

    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                record: record.to_string(),
            });
        }
        if seen.contains(&field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                record: record.to_string(),
                field: field.name.clone(),
            });
        }
        seen.push(field.name.as_str());

        validate_kind(record, &field.kind)?;
    }

    Ok(())
}

fn validate_kind(record: &str, kind: &NodeKind) -> Result<(), SchemaError> {
    match kind {
        NodeKind::Record(fields) => validate_fields(record, fields),
        NodeKind::List(inner) => validate_kind(record, inner),
        NodeKind::Reference { .. } | NodeKind::Scalar(_) => Ok(()),
    }
}
