//! Public facade for the Sift filter model.
//!
//! ## Crate layout
//! - `core`: paths, field kinds and operators, clauses, filters, the
//!   mutation protocol, and query lowering.
//! - `schema`: the record-schema AST and template inspection.
//!
//! The `prelude` module mirrors the vocabulary a UI layer works with.

pub use sift_core as core;
pub use sift_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use sift_core::prelude::*;
    pub use sift_schema::{FieldNode, NodeKind, RecordSchema};
}
