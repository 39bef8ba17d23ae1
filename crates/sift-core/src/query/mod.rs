
use crate::{
    condition::Rhs,
    field::CompareOp,
    filter::{Builtin, Filter},
    path::Path,
};
use serde::{Deserialize, Serialize};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// OrderSpec
///
/// Sort fields in application order (ascending priority).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    pub fields: Vec<(Path, OrderDirection)>,
}

///
/// ComparePredicate
///
/// One lowered comparison. Field-reference operands are carried
/// symbolically; the engine resolves them against the template list and
/// treats a dangling reference as no-match.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub path: Path,
    pub op: CompareOp,
    pub rhs: Rhs,
}

///
/// Predicate
///
/// Schema-agnostic request predicate. The model only ever produces a flat
/// conjunction, but the engine contract keeps `And` general.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Predicate {
    And(Vec<Predicate>),
    Compare(ComparePredicate),
    True,
}

///
/// QueryRequest
///
/// Everything the query engine needs from one finalized filter.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryRequest {
    pub predicate: Predicate,
    pub order: OrderSpec,
}

/// Lower a filter into an engine request: the conjunction of every active
/// condition (built-ins first, then clauses in display order) plus the
/// sort spec by ascending priority. Inactive clauses and condition-free
/// templates contribute nothing.
#[must_use]
pub fn lower(filter: &Filter) -> QueryRequest {
    let mut clauses = Vec::new();

    for builtin in [Builtin::Id, Builtin::CreatedAt, Builtin::UpdatedAt] {
        if let Some(bc) = filter.builtin(builtin)
            && bc.active
        {
            clauses.push(Predicate::Compare(ComparePredicate {
                path: builtin.path(),
                op: bc.condition.op(),
                rhs: bc.condition.rhs().clone(),
            }));
        }
    }

    for fp in &filter.paths {
        if !fp.active {
            continue;
        }
        if let Some(condition) = &fp.condition {
            clauses.push(Predicate::Compare(ComparePredicate {
                path: fp.path.clone(),
                op: condition.op(),
                rhs: condition.rhs().clone(),
            }));
        }
    }

    let predicate = match clauses.len() {
        0 => Predicate::True,
        1 => clauses.remove(0),
        _ => Predicate::And(clauses),
    };

    let order = OrderSpec {
        fields: filter
            .paths
            .sorted_paths()
            .into_iter()
            .map(|(path, sort)| {
                let direction = if sort.descending {
                    OrderDirection::Desc
                } else {
                    OrderDirection::Asc
                };

                (path, direction)
            })
            .collect(),
    };

    QueryRequest { predicate, order }
}
