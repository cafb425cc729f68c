use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    cmp::Ordering,
    collections::BTreeMap,
    time::{SystemTime, UNIX_EPOCH},
};

///
/// EventState
/// Ephemeral, in-memory counters for list queries and inserts.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
    pub window_start_ms: u64,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            ops: EventOps::default(),
            entities: BTreeMap::new(),
            window_start_ms: now_millis(),
        }
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Engine entrypoints
    pub query_calls: u64,
    pub query_rejected: u64,

    // Rows touched
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub rows_returned: u64,

    // Mutations
    pub inserts: u64,
}

///
/// EntityCounters
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntityCounters {
    pub query_calls: u64,
    pub query_rejected: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub rows_returned: u64,
    pub inserts: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all event state and start a new window.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

///
/// EventReport
/// Event/counter report for one metrics window.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    /// Ephemeral runtime counters since `window_start_ms`.
    pub counters: Option<EventState>,
    /// Per-entity counters and averages.
    pub entity_counters: Vec<EntitySummary>,
}

///
/// EntitySummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntitySummary {
    pub path: String,
    pub query_calls: u64,
    pub query_rejected: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub rows_returned: u64,
    pub inserts: u64,
    pub avg_rows_matched_per_query: f64,
}

/// Build a report; `window_start_ms` after the current window start yields
/// an empty report.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn report_window_start(window_start_ms: Option<u64>) -> EventReport {
    let snap = with_state(Clone::clone);
    if window_start_ms.is_some_and(|start| start > snap.window_start_ms) {
        return EventReport::default();
    }

    let mut entity_counters: Vec<EntitySummary> = snap
        .entities
        .iter()
        .map(|(path, ops)| {
            let avg_matched = if ops.query_calls > 0 {
                ops.rows_matched as f64 / ops.query_calls as f64
            } else {
                0.0
            };

            EntitySummary {
                path: path.clone(),
                query_calls: ops.query_calls,
                query_rejected: ops.query_rejected,
                rows_scanned: ops.rows_scanned,
                rows_matched: ops.rows_matched,
                rows_returned: ops.rows_returned,
                inserts: ops.inserts,
                avg_rows_matched_per_query: avg_matched,
            }
        })
        .collect();

    entity_counters.sort_by(|a, b| {
        match b.query_calls.cmp(&a.query_calls) {
            Ordering::Equal => a.path.cmp(&b.path),
            other => other,
        }
    });

    EventReport {
        counters: Some(snap),
        entity_counters,
    }
}

///
/// TESTS
///
