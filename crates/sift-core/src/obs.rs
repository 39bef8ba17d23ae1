//! Model instrumentation boundary.
//!
//! The reducer MUST NOT depend on any logging backend directly; every
//! applied mutation flows through `ModelEvent` and `ModelSink`. The default
//! sink counts into thread-local stats; embedders and tests can install a
//! scoped override.

use std::{cell::RefCell, rc::Rc};

thread_local! {
    static STATS: RefCell<ModelStats> = RefCell::new(ModelStats::default());
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn ModelSink>>> = const { RefCell::new(None) };
}

///
/// ModelEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelEvent {
    ActionApplied { action: &'static str },
    PathUpserted,
    PathRemoved,
    BuiltinReplaced,
    SortChanged,
}

///
/// ModelStats
///
/// Counters accumulated by the default sink.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModelStats {
    pub actions_applied: u64,
    pub paths_upserted: u64,
    pub paths_removed: u64,
    pub builtin_replacements: u64,
    pub sort_transitions: u64,
}

///
/// ModelSink
///

pub trait ModelSink {
    fn record(&self, event: ModelEvent);
}

/// Default process-local sink that writes into the thread-local stats.
struct StatsSink;

impl ModelSink for StatsSink {
    fn record(&self, event: ModelEvent) {
        STATS.with_borrow_mut(|stats| match event {
            ModelEvent::ActionApplied { .. } => {
                stats.actions_applied = stats.actions_applied.saturating_add(1);
            }
            ModelEvent::PathUpserted => {
                stats.paths_upserted = stats.paths_upserted.saturating_add(1);
            }
            ModelEvent::PathRemoved => {
                stats.paths_removed = stats.paths_removed.saturating_add(1);
            }
            ModelEvent::BuiltinReplaced => {
                stats.builtin_replacements = stats.builtin_replacements.saturating_add(1);
            }
            ModelEvent::SortChanged => {
                stats.sort_transitions = stats.sort_transitions.saturating_add(1);
            }
        });
    }
}

pub(crate) fn record(event: ModelEvent) {
    let sink = SINK_OVERRIDE.with_borrow(Clone::clone);

    match sink {
        Some(sink) => sink.record(event),
        None => StatsSink.record(event),
    }
}

/// Snapshot the current thread's stats.
#[must_use]
pub fn stats() -> ModelStats {
    STATS.with_borrow(|stats| *stats)
}

/// Reset the current thread's stats.
pub fn reset_stats() {
    STATS.with_borrow_mut(|stats| *stats = ModelStats::default());
}

/// Run a closure with a temporary sink override. The previous sink is
/// restored on all exits, including unwind.
pub fn with_sink<T>(sink: Rc<dyn ModelSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn ModelSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with_borrow_mut(|slot| *slot = self.0.take());
        }
    }

    let prev = SINK_OVERRIDE.with_borrow_mut(|slot| slot.replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<ModelEvent>>);

    impl ModelSink for Recorder {
        fn record(&self, event: ModelEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    #[test]
    fn default_sink_counts_into_stats() {
        reset_stats();

        record(ModelEvent::ActionApplied { action: "sort:add" });
        record(ModelEvent::SortChanged);
        record(ModelEvent::SortChanged);

        let stats = stats();
        assert_eq!(stats.actions_applied, 1);
        assert_eq!(stats.sort_transitions, 2);
    }

    #[test]
    fn override_captures_events_and_restores() {
        reset_stats();
        let recorder = Rc::new(Recorder::default());

        with_sink(recorder.clone(), || {
            record(ModelEvent::PathUpserted);
        });
        record(ModelEvent::PathRemoved);

        assert_eq!(recorder.0.borrow().as_slice(), &[ModelEvent::PathUpserted]);

        // The override swallowed the first event; only the second hit stats.
        let stats = stats();
        assert_eq!(stats.paths_upserted, 0);
        assert_eq!(stats.paths_removed, 1);
    }
}
