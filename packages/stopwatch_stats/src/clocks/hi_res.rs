use std::time::Instant;

use crate::Clock;

/// Monotonic clock offering the highest resolution available from the standard library.
///
/// Backed by [`std::time::Instant`], which targets sub-microsecond resolution on all
/// mainstream platforms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct HiResClock;

impl Clock for HiResClock {
    type Instant = Instant;

    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn interval(&self, start: Instant, end: Instant) -> f64 {
        end.saturating_duration_since(start).as_secs_f64()
    }
}
