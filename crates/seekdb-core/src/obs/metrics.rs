use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

///
/// MetricsState
/// Thread-local counter state behind the sink boundary.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct MetricsState {
    pub list_calls: u64,
    pub retrieve_calls: u64,
    pub retrieve_misses: u64,
    pub rows_listed: u64,
    pub pages_with_continuation: u64,
    pub cursor_rejections: u64,
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsState) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn with_state<R>(f: impl FnOnce(&MetricsState) -> R) -> R {
    STATE.with(|state| f(&state.borrow()))
}

///
/// MetricsReport
/// Point-in-time counter snapshot for observability surfaces.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub list_calls: u64,
    pub retrieve_calls: u64,
    pub retrieve_misses: u64,
    pub rows_listed: u64,
    pub pages_with_continuation: u64,
    pub cursor_rejections: u64,
}

impl From<&MetricsState> for MetricsReport {
    fn from(state: &MetricsState) -> Self {
        Self {
            list_calls: state.list_calls,
            retrieve_calls: state.retrieve_calls,
            retrieve_misses: state.retrieve_misses,
            rows_listed: state.rows_listed,
            pages_with_continuation: state.pages_with_continuation,
            cursor_rejections: state.cursor_rejections,
        }
    }
}
