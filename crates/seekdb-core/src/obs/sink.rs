//! Metrics sink boundary.
//!
//! Core engine logic MUST NOT depend on `obs::metrics` directly.
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.

use crate::obs::metrics::{self, MetricsReport};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ListStart {
        entity_path: &'static str,
        boundary_kind: &'static str,
    },
    ListFinish {
        entity_path: &'static str,
        rows: u64,
        has_more: bool,
    },
    RetrieveStart {
        entity_path: &'static str,
    },
    RetrieveFinish {
        entity_path: &'static str,
        found: bool,
    },
    CursorRejected {
        entity_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
/// Default process-local sink that writes into thread-local counter state.
///

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ListStart { .. } => {
                metrics::with_state_mut(|m| {
                    m.list_calls = m.list_calls.saturating_add(1);
                });
            }

            MetricsEvent::ListFinish { rows, has_more, .. } => {
                metrics::with_state_mut(|m| {
                    m.rows_listed = m.rows_listed.saturating_add(rows);
                    if has_more {
                        m.pages_with_continuation = m.pages_with_continuation.saturating_add(1);
                    }
                });
            }

            MetricsEvent::RetrieveStart { .. } => {
                metrics::with_state_mut(|m| {
                    m.retrieve_calls = m.retrieve_calls.saturating_add(1);
                });
            }

            MetricsEvent::RetrieveFinish { found, .. } => {
                if !found {
                    metrics::with_state_mut(|m| {
                        m.retrieve_misses = m.retrieve_misses.saturating_add(1);
                    });
                }
            }

            MetricsEvent::CursorRejected { .. } => {
                metrics::with_state_mut(|m| {
                    m.cursor_rejections = m.cursor_rejections.saturating_add(1);
                });
            }
        }
    }
}

/// Record one event against the global sink.
pub(crate) fn record(event: MetricsEvent) {
    GlobalMetricsSink.record(event);
}

/// Build a point-in-time counter report.
#[must_use]
pub fn metrics_report() -> MetricsReport {
    metrics::with_state(|s| MetricsReport::from(s))
}

/// Reset all counters. Intended for tests and operator tooling.
pub fn metrics_reset_all() {
    metrics::with_state_mut(|m| *m = crate::obs::metrics::MetricsState::default());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{MetricsEvent, metrics_report, metrics_reset_all, record};

    #[test]
    fn counters_accumulate_and_reset() {
        metrics_reset_all();

        record(MetricsEvent::ListStart {
            entity_path: "test",
            boundary_kind: "unbounded",
        });
        record(MetricsEvent::ListFinish {
            entity_path: "test",
            rows: 50,
            has_more: true,
        });
        record(MetricsEvent::CursorRejected { entity_path: "test" });

        let report = metrics_report();
        assert_eq!(report.list_calls, 1);
        assert_eq!(report.rows_listed, 50);
        assert_eq!(report.pages_with_continuation, 1);
        assert_eq!(report.cursor_rejections, 1);

        metrics_reset_all();
        assert_eq!(metrics_report().list_calls, 0);
    }
}
