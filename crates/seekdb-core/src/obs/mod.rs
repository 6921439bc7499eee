//! Observability: runtime telemetry counters and the sink abstraction.
//!
//! Engine logic MUST NOT touch counter state directly; all instrumentation
//! flows through [`MetricsEvent`] and [`MetricsSink`]. This module is the
//! only bridge between execution logic and telemetry state.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::MetricsReport;
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
