use crate::{filter_path::FilterPath, path::Path};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// PathList
///
/// Insertion-ordered collection of clauses, unique by path identity.
/// Replacement happens in place, so an edited clause keeps its display
/// position. Serializes identically to `Vec<FilterPath>`.
///
/// Mutation is explicit; `PathList` does not expose `DerefMut` to avoid
/// bypassing the uniqueness invariant.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PathList(Vec<FilterPath>);

impl PathList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from existing clauses, keeping the last clause for
    /// each path.
    #[must_use]
    pub fn from_vec(clauses: Vec<FilterPath>) -> Self {
        let mut list = Self::new();
        for fp in clauses {
            list.upsert(fp);
        }

        list
    }

    /// Return the number of clauses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the clauses.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterPath> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, FilterPath> {
        self.0.iter_mut()
    }

    /// Position of the clause bound to `path`, if any.
    #[must_use]
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.0.iter().position(|fp| fp.path == *path)
    }

    /// The clause bound to `path`, if any.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&FilterPath> {
        self.0.iter().find(|fp| fp.path == *path)
    }

    pub(crate) fn get_mut(&mut self, path: &Path) -> Option<&mut FilterPath> {
        self.0.iter_mut().find(|fp| fp.path == *path)
    }

    /// True if a clause is bound to `path`.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// True if any clause satisfies the predicate.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&FilterPath) -> bool,
    {
        self.0.iter().any(predicate)
    }

    /// Insert or replace by path identity. An existing clause is replaced
    /// in place, keeping its position; a new clause is appended.
    pub fn upsert(&mut self, fp: FilterPath) {
        match self.position(&fp.path) {
            Some(idx) => self.0[idx] = fp,
            None => self.0.push(fp),
        }
    }

    /// Remove the clause bound to `path`; absent paths are a no-op.
    ///
    /// If the removed clause held a sort priority, higher priorities are
    /// compacted down so the remaining keys stay a dense `1..=N` run.
    pub fn remove(&mut self, path: &Path) -> Option<FilterPath> {
        let idx = self.position(path)?;
        let removed = self.0.remove(idx);

        if let Some(sort) = removed.sort {
            self.compact_above(sort.priority);
        }

        Some(removed)
    }

    /// Clone the clauses into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<FilterPath> {
        self.0.clone()
    }
}

impl From<Vec<FilterPath>> for PathList {
    fn from(clauses: Vec<FilterPath>) -> Self {
        Self::from_vec(clauses)
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a FilterPath;
    type IntoIter = std::slice::Iter<'a, FilterPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
