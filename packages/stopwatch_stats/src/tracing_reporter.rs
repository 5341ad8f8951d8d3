use crate::{Reporter, Stats};

/// Reporter that emits each report as a `tracing` event at the `INFO` level.
///
/// The event carries the timer label in the `timer` field, the sample count in the `count`
/// field and the rendered statistics in the `stats` field. What happens to the event is up to
/// the subscriber installed by the application; without one, reports are discarded.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report<S: Stats>(&self, label: &str, stats: &S) {
        tracing::info!(
            timer = label,
            count = stats.count(),
            stats = %stats,
            "timer report"
        );
    }
}
