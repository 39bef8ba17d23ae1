mod path_list;
mod sort;


pub use path_list::PathList;

use crate::{
    condition::{Condition, Rhs, Scalar},
    field::{CompareOp, FieldKind},
    filter_path::FilterPath,
    path::Path,
    types::Timestamp,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Builtin
///
/// The three built-in pseudo-fields every record carries: the unique
/// identifier and the created/updated timestamps.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Builtin {
    CreatedAt,
    Id,
    UpdatedAt,
}

impl Builtin {
    /// Field kind of the pseudo-field: the identifier is decimal-typed,
    /// the audit stamps are timestamps.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Id => FieldKind::Decimal,
            Self::CreatedAt | Self::UpdatedAt => FieldKind::Timestamp,
        }
    }

    /// Path the pseudo-field lowers to in a query request.
    #[must_use]
    pub fn path(self) -> Path {
        match self {
            Self::CreatedAt => Path::field("created_at"),
            Self::Id => Path::field("id"),
            Self::UpdatedAt => Path::field("updated_at"),
        }
    }
}

///
/// BuiltinCondition
///
/// One built-in pseudo-field clause: a typed condition plus the active
/// toggle.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BuiltinCondition {
    pub active: bool,
    pub condition: Condition,
}

impl BuiltinCondition {
    /// An active clause around `condition`.
    #[must_use]
    pub const fn new(condition: Condition) -> Self {
        Self {
            active: true,
            condition,
        }
    }

    /// The default clause the UI attaches when a timestamp built-in is
    /// first activated: a `now..now` range.
    #[must_use]
    pub fn timestamp_now() -> Self {
        let now = Timestamp::now();

        Self::new(Condition::new(
            CompareOp::Between,
            Rhs::range(Scalar::Timestamp(now), Scalar::Timestamp(now)),
        ))
    }

    /// Flip the active flag without touching the condition.
    #[must_use]
    pub const fn set_active(mut self, active: bool) -> Self {
        self.active = active;

        self
    }
}

///
/// Filter
///
/// One full filter/sort specification: the three built-in conditions plus
/// an insertion-ordered set of clauses, unique by path. Mutation is
/// functional: every edit consumes the filter and returns the next value,
/// so dispatched actions stay pure.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Filter {
    pub index: u32,
    pub id: Option<BuiltinCondition>,
    pub created_at: Option<BuiltinCondition>,
    pub updated_at: Option<BuiltinCondition>,
    pub paths: PathList,
}

impl Filter {
    /// An empty filter with the given display ordinal.
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Insert or replace a clause by path identity (see `PathList::upsert`).
    #[must_use]
    pub fn add_path(mut self, fp: FilterPath) -> Self {
        self.paths.upsert(fp);

        self
    }

    /// Remove the clause bound to `path`; absent paths are a no-op.
    #[must_use]
    pub fn remove_path(mut self, path: &Path) -> Self {
        self.paths.remove(path);

        self
    }

    /// Replace one built-in condition wholesale. Panics if the supplied
    /// condition's operator is not legal for the pseudo-field's kind.
    #[must_use]
    pub fn set_builtin(mut self, builtin: Builtin, condition: Option<BuiltinCondition>) -> Self {
        if let Some(bc) = &condition {
            assert!(
                builtin.kind().supports(bc.condition.op()),
                "operator {} is not legal for the {builtin} built-in",
                bc.condition.op(),
            );
        }

        match builtin {
            Builtin::CreatedAt => self.created_at = condition,
            Builtin::Id => self.id = condition,
            Builtin::UpdatedAt => self.updated_at = condition,
        }

        self
    }

    /// Read one built-in condition.
    #[must_use]
    pub const fn builtin(&self, builtin: Builtin) -> Option<&BuiltinCondition> {
        match builtin {
            Builtin::CreatedAt => self.created_at.as_ref(),
            Builtin::Id => self.id.as_ref(),
            Builtin::UpdatedAt => self.updated_at.as_ref(),
        }
    }

    /// Apply one sort transition (see the `sort` module).
    #[must_use]
    pub fn sort_add(mut self, path: &Path) -> Self {
        self.paths.sort_add(path);

        self
    }

    #[must_use]
    pub fn sort_remove(mut self, path: &Path) -> Self {
        self.paths.sort_remove(path);

        self
    }

    #[must_use]
    pub fn sort_toggle(mut self, path: &Path) -> Self {
        self.paths.sort_toggle(path);

        self
    }

    #[must_use]
    pub fn sort_up(mut self, path: &Path) -> Self {
        self.paths.sort_up(path);

        self
    }

    #[must_use]
    pub fn sort_down(mut self, path: &Path) -> Self {
        self.paths.sort_down(path);

        self
    }
}
