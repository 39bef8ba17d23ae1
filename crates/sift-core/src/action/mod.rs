
use crate::{
    filter::{Builtin, BuiltinCondition, Filter},
    filter_path::FilterPath,
    obs::{self, ModelEvent},
    path::Path,
};
use serde::{Deserialize, Serialize};

///
/// FilterAction
///
/// Whole-filter lifecycle within a collection of filters.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FilterAction {
    /// Append a blank filter; its ordinal is the next free slot.
    Add,
    Remove {
        index: usize,
    },
    Replace {
        index: usize,
        filter: Filter,
    },
}

///
/// PathAction
///
/// Clause-level mutation scoped to one filter. `Add` and `Replace` are
/// both upserts by path identity.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PathAction {
    Add {
        fp: FilterPath,
    },
    Remove {
        path: Path,
    },
    Replace {
        fp: FilterPath,
    },
    SetBuiltin {
        builtin: Builtin,
        condition: Option<BuiltinCondition>,
    },
}

///
/// SortAction
///
/// One sort state-machine transition scoped to one clause.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum SortAction {
    Add { path: Path },
    Down { path: Path },
    Remove { path: Path },
    Toggle { path: Path },
    Up { path: Path },
}

///
/// Action
///
/// The closed mutation protocol. Every action is a total function over
/// the current filter collection: out-of-range indices and absent paths
/// are no-ops, and invalid operator/operand states are unrepresentable
/// by construction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Action {
    Filters(FilterAction),
    Paths { index: usize, action: PathAction },
    Sort { index: usize, action: SortAction },
}

impl Action {
    /// Stable action label for instrumentation.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Filters(FilterAction::Add) => "filter:add",
            Self::Filters(FilterAction::Remove { .. }) => "filter:remove",
            Self::Filters(FilterAction::Replace { .. }) => "filter:replace",
            Self::Paths { action, .. } => match action {
                PathAction::Add { .. } => "filters:add",
                PathAction::Remove { .. } => "filters:remove",
                PathAction::Replace { .. } => "filters:replace",
                PathAction::SetBuiltin { .. } => "filters:builtin",
            },
            Self::Sort { action, .. } => match action {
                SortAction::Add { .. } => "sort:add",
                SortAction::Down { .. } => "sort:down",
                SortAction::Remove { .. } => "sort:remove",
                SortAction::Toggle { .. } => "sort:toggle",
                SortAction::Up { .. } => "sort:up",
            },
        }
    }
}

/// Apply one action to the current filter collection, producing the next
/// collection. Pure value-in/value-out; the inputs are never mutated.
#[must_use]
pub fn reduce(filters: &[Filter], action: &Action) -> Vec<Filter> {
    obs::record(ModelEvent::ActionApplied {
        action: action.label(),
    });

    match action {
        Action::Filters(action) => reduce_filters(filters, action),
        Action::Paths { index, action } => {
            with_filter(filters, *index, |filter| reduce_paths(filter, action))
        }
        Action::Sort { index, action } => {
            with_filter(filters, *index, |filter| reduce_sort(filter, action))
        }
    }
}

fn reduce_filters(filters: &[Filter], action: &FilterAction) -> Vec<Filter> {
    let mut next = filters.to_vec();

    match action {
        FilterAction::Add => {
            #[expect(clippy::cast_possible_truncation)]
            next.push(Filter::new(next.len() as u32));
        }
        FilterAction::Remove { index } => {
            if *index < next.len() {
                next.remove(*index);
            }
        }
        FilterAction::Replace { index, filter } => {
            if let Some(slot) = next.get_mut(*index) {
                *slot = filter.clone();
            }
        }
    }

    next
}

/// Rebuild the collection with one filter replaced by `f(filter)`;
/// out-of-range indices leave the collection untouched.
fn with_filter(
    filters: &[Filter],
    index: usize,
    f: impl FnOnce(Filter) -> Filter,
) -> Vec<Filter> {
    let mut next = filters.to_vec();

    if let Some(slot) = next.get_mut(index) {
        *slot = f(slot.clone());
    }

    next
}

fn reduce_paths(filter: Filter, action: &PathAction) -> Filter {
    match action {
        PathAction::Add { fp } | PathAction::Replace { fp } => {
            obs::record(ModelEvent::PathUpserted);

            filter.add_path(fp.clone())
        }
        PathAction::Remove { path } => {
            if filter.paths.contains(path) {
                obs::record(ModelEvent::PathRemoved);
            }

            filter.remove_path(path)
        }
        PathAction::SetBuiltin { builtin, condition } => {
            obs::record(ModelEvent::BuiltinReplaced);

            filter.set_builtin(*builtin, condition.clone())
        }
    }
}

fn reduce_sort(filter: Filter, action: &SortAction) -> Filter {
    let next = match action {
        SortAction::Add { path } => filter.clone().sort_add(path),
        SortAction::Down { path } => filter.clone().sort_down(path),
        SortAction::Remove { path } => filter.clone().sort_remove(path),
        SortAction::Toggle { path } => filter.clone().sort_toggle(path),
        SortAction::Up { path } => filter.clone().sort_up(path),
    };

    if next != filter {
        obs::record(ModelEvent::SortChanged);
    }

    next
}
