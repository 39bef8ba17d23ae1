//! Sort ordering state machine.
//!
//! Each clause optionally carries a `(priority, descending)` key. The
//! transitions below keep priorities a dense `1..=N` sequence across one
//! `PathList`: add assigns `max + 1`, remove closes the gap it leaves,
//! up/down swap with the adjacent priority and are no-ops at the
//! boundaries.

use crate::{filter::PathList, filter_path::SortKey, path::Path};

impl PathList {
    /// Highest priority currently assigned, `0` when nothing is ordered.
    #[must_use]
    pub fn max_priority(&self) -> u32 {
        self.iter()
            .filter_map(|fp| fp.sort.map(|s| s.priority))
            .max()
            .unwrap_or(0)
    }

    /// Clauses holding a sort key, ascending by priority.
    #[must_use]
    pub fn sorted_paths(&self) -> Vec<(Path, SortKey)> {
        let mut keys: Vec<(Path, SortKey)> = self
            .iter()
            .filter_map(|fp| fp.sort.map(|s| (fp.path.clone(), s)))
            .collect();
        keys.sort_by_key(|(_, s)| s.priority);

        keys
    }

    /// `unordered -> ordered`: assign the next priority with the kind's
    /// default direction. No-op if the clause is absent or already ordered.
    pub fn sort_add(&mut self, path: &Path) {
        let next = self.max_priority() + 1;

        if let Some(fp) = self.get_mut(path)
            && fp.sort.is_none()
        {
            fp.sort = Some(SortKey {
                priority: next,
                descending: fp.kind.default_descending(),
            });
        }
    }

    /// `ordered -> unordered`: clear the key and close the priority gap.
    pub fn sort_remove(&mut self, path: &Path) {
        let Some(removed) = self.get_mut(path).and_then(|fp| fp.sort.take()) else {
            return;
        };

        self.compact_above(removed.priority);
    }

    /// Flip the direction in place; priority unchanged.
    pub fn sort_toggle(&mut self, path: &Path) {
        if let Some(sort) = self.get_mut(path).and_then(|fp| fp.sort.as_mut()) {
            sort.descending = !sort.descending;
        }
    }

    /// Swap with the clause holding the next-lower priority; no-op at
    /// priority 1.
    pub fn sort_up(&mut self, path: &Path) {
        let Some(priority) = self.priority_of(path) else {
            return;
        };
        if priority <= 1 {
            return;
        }

        self.swap_priorities(priority, priority - 1);
    }

    /// Swap with the clause holding the next-higher priority; no-op at the
    /// maximum.
    pub fn sort_down(&mut self, path: &Path) {
        let Some(priority) = self.priority_of(path) else {
            return;
        };
        if priority >= self.max_priority() {
            return;
        }

        self.swap_priorities(priority, priority + 1);
    }

    fn priority_of(&self, path: &Path) -> Option<u32> {
        self.get(path).and_then(|fp| fp.sort.map(|s| s.priority))
    }

    /// Decrement every priority above `removed`, keeping `1..=N` dense and
    /// the relative order of the remaining clauses intact.
    pub(crate) fn compact_above(&mut self, removed: u32) {
        for fp in self.iter_mut() {
            if let Some(sort) = fp.sort.as_mut()
                && sort.priority > removed
            {
                sort.priority -= 1;
            }
        }
    }

    fn swap_priorities(&mut self, a: u32, b: u32) {
        for fp in self.iter_mut() {
            if let Some(sort) = fp.sort.as_mut() {
                if sort.priority == a {
                    sort.priority = b;
                } else if sort.priority == b {
                    sort.priority = a;
                }
            }
        }
    }
}
