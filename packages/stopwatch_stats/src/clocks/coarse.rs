use std::time::{SystemTime, UNIX_EPOCH};

use crate::Clock;

/// Low-precision wall clock with a resolution of one second.
///
/// This is a fallback for environments where nothing better is available. The underlying
/// system clock is not monotonic: if the operating system steps the clock backwards during
/// a measurement, the measured interval is negative. Prefer [`HiResClock`](crate::HiResClock).
///
/// Instants are whole seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct CoarseClock;

impl Clock for CoarseClock {
    type Instant = i64;

    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => i64::try_from(since_epoch.as_secs())
                .expect("system clock beyond year 292 billion - impossible"),
            Err(before_epoch) => i64::try_from(before_epoch.duration().as_secs())
                .map(i64::wrapping_neg)
                .expect("system clock before year -292 billion - impossible"),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "second counts between two realistic instants are far below 2^52"
    )]
    fn interval(&self, start: i64, end: i64) -> f64 {
        end.wrapping_sub(start) as f64
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn interval_is_whole_seconds() {
        let clock = CoarseClock;

        assert_eq!(clock.interval(100, 103).to_bits(), 3.0_f64.to_bits());
        assert_eq!(clock.interval(100, 100).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn interval_can_be_negative_when_clock_steps_back() {
        let clock = CoarseClock;

        assert!(clock.interval(105, 100) < 0.0);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot talk to the real platform.
    fn now_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(CoarseClock.now() > 1_577_836_800);
    }
}
