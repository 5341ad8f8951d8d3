use std::fmt;

use crate::Stats;

/// A statistics accumulator that ignores every sample.
///
/// Used by [`NullManager`](crate::NullManager) so that disabled timers carry no state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct NullStats;

impl Stats for NullStats {
    #[inline]
    fn add_sample(&mut self, _seconds: f64) {}

    fn count(&self) -> u64 {
        0
    }
}

impl fmt::Display for NullStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(no statistics)")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_eq_size;

    use super::*;

    assert_eq_size!(NullStats, ());

    #[test]
    fn ignores_samples() {
        let mut stats = NullStats;
        for _ in 0..100 {
            stats.add_sample(1.0);
        }

        assert_eq!(stats.count(), 0);
        assert_eq!(stats, NullStats);
        assert_eq!(stats.to_string(), "(no statistics)");
    }
}
