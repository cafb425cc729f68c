//! Metrics sink boundary.
//!
//! Engine and collection logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between execution logic
//! and the thread-local metrics state.
use crate::{obs::metrics, traits::EntityKind};
use std::{cell::RefCell, marker::PhantomData};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    QueryStart {
        entity_path: &'static str,
    },
    QueryFinish {
        entity_path: &'static str,
        rows_scanned: u64,
        rows_matched: u64,
        rows_returned: u64,
    },
    QueryRejected {
        entity_path: &'static str,
    },
    Insert {
        entity_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the metrics state.
/// Acts as the concrete sink when no scoped override is installed.

struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::QueryStart { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.query_calls = m.ops.query_calls.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.query_calls = entry.query_calls.saturating_add(1);
                });
            }

            MetricsEvent::QueryFinish {
                entity_path,
                rows_scanned,
                rows_matched,
                rows_returned,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.rows_scanned = m.ops.rows_scanned.saturating_add(rows_scanned);
                    m.ops.rows_matched = m.ops.rows_matched.saturating_add(rows_matched);
                    m.ops.rows_returned = m.ops.rows_returned.saturating_add(rows_returned);

                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.rows_scanned = entry.rows_scanned.saturating_add(rows_scanned);
                    entry.rows_matched = entry.rows_matched.saturating_add(rows_matched);
                    entry.rows_returned = entry.rows_returned.saturating_add(rows_returned);
                });
            }

            MetricsEvent::QueryRejected { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.query_rejected = m.ops.query_rejected.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.query_rejected = entry.query_rejected.saturating_add(1);
                });
            }

            MetricsEvent::Insert { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.inserts = m.ops.inserts.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.inserts = entry.inserts.saturating_add(1);
                });
            }
        }
    }
}

const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - Only a shared reference is materialized, matching the shared borrow
        //   used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current metrics state.
///
/// `window_start_ms` filters by window start (`EventState::window_start_ms`),
/// not by per-event timestamps.
#[must_use]
pub fn metrics_report(window_start_ms: Option<u64>) -> metrics::EventReport {
    metrics::report_window_start(window_start_ms)
}

/// Reset all metrics state and open a new window.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

/// Span
/// RAII guard that emits start/finish metrics events for one engine call.
/// Finish accounting happens even on unwind.

pub(crate) struct Span<E: EntityKind> {
    rows_scanned: u64,
    rows_matched: u64,
    rows_returned: u64,
    _marker: PhantomData<E>,
}

impl<E: EntityKind> Span<E> {
    #[must_use]
    pub(crate) fn new() -> Self {
        record(MetricsEvent::QueryStart {
            entity_path: E::MODEL.path,
        });

        Self {
            rows_scanned: 0,
            rows_matched: 0,
            rows_returned: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) const fn set_rows(&mut self, scanned: u64, matched: u64, returned: u64) {
        self.rows_scanned = scanned;
        self.rows_matched = matched;
        self.rows_returned = returned;
    }
}

impl<E: EntityKind> Drop for Span<E> {
    fn drop(&mut self) {
        record(MetricsEvent::QueryFinish {
            entity_path: E::MODEL.path,
            rows_scanned: self.rows_scanned,
            rows_matched: self.rows_matched,
            rows_returned: self.rows_returned,
        });
    }
}
