use crate::Clock;

/// A clock that never advances.
///
/// Every instant is the unit value and every interval is zero. This is the clock used by
/// [`NullManager`](crate::NullManager) and compiles down to nothing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct NullClock;

impl Clock for NullClock {
    type Instant = ();

    #[inline]
    fn now(&self) {}

    #[inline]
    fn interval(&self, _start: (), _end: ()) -> f64 {
        0.0
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_eq_size;

    use super::*;

    assert_eq_size!(NullClock, ());

    #[test]
    fn interval_is_always_zero() {
        let clock = NullClock;

        let start = clock.now();
        let end = clock.now();

        assert_eq!(clock.interval(start, end).to_bits(), 0.0_f64.to_bits());
    }
}
