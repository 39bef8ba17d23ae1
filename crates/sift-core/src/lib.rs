//! Core model for Sift: schema paths, the per-kind operator algebra,
//! filter clauses, the sort state machine, the mutation protocol, and
//! lowering into query-engine requests.

pub mod action;
pub mod condition;
pub mod field;
pub mod filter;
pub mod filter_path;
pub mod obs;
pub mod path;
pub mod query;
pub mod types;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. Actions, lowering, and the
/// observability surface are imported explicitly where needed.
///

pub mod prelude {
    pub use crate::{
        condition::{Condition, Operand, Rhs, Scalar},
        field::{CompareOp, FieldCategory, FieldKind},
        filter::{Builtin, BuiltinCondition, Filter, PathList},
        filter_path::{FilterPath, OtherRef, SortKey},
        path::{Nesting, Path, Step},
        types::{Date, Decimal, Time, Timestamp},
    };
}
