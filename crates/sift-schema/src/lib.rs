//! Schema inspector for Sift: a record-schema AST plus the walk that
//! enumerates the available clause templates for a record type.

mod inspect;
mod node;

#[cfg(test)]
mod tests;

pub use inspect::inspect;
pub use node::{FieldNode, NodeKind, RecordSchema, SchemaError};
