use crate::{CorrelationManager, NullClock, NullStats};

/// Correlation manager that does nothing.
///
/// Every operation is an empty inline function and the type has no state, so a timer
/// using it compiles down to nothing.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct NullManager;

impl CorrelationManager for NullManager {
    type Clock = NullClock;
    type Stats = NullStats;

    #[inline]
    fn record_start(&self, _now: ()) {}

    #[inline]
    fn update_stats(&self, _clock: &NullClock, _now: ()) {}

    #[inline]
    fn stats(&self) -> NullStats {
        NullStats
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::{assert_eq_size, assert_impl_all};

    use super::*;
    use crate::Stats;

    assert_eq_size!(NullManager, ());
    assert_impl_all!(NullManager: Send, Sync);

    #[test]
    fn records_nothing() {
        let manager = NullManager;

        manager.record_start(());
        manager.update_stats(&NullClock, ());
        manager.update_stats(&NullClock, ());

        assert_eq!(manager.stats().count(), 0);
    }
}
