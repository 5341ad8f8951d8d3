use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::Clock;

/// An instant captured by [`MonotonicClock`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonotonicInstant {
    secs: i64,
    nanos: i64,
}

/// Monotonic clock reading `clock_gettime(CLOCK_MONOTONIC)` directly.
///
/// This bypasses the standard library and offers nanosecond resolution on Unix systems.
///
/// # Panics
///
/// Reading the clock panics if the operating system reports a failure. This never happens
/// on a functioning system and is treated as fatal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = MonotonicInstant;

    #[allow(
        clippy::useless_conversion,
        reason = "conditional - field widths of timespec differ between targets"
    )]
    fn now(&self) -> MonotonicInstant {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        MonotonicInstant {
            secs: i64::from(ts.tv_sec),
            nanos: i64::from(ts.tv_nsec),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "intervals between realistic instants are far below 2^52 nanoseconds"
    )]
    fn interval(&self, start: MonotonicInstant, end: MonotonicInstant) -> f64 {
        end.secs.wrapping_sub(start.secs) as f64 + end.nanos.wrapping_sub(start.nanos) as f64 * 1e-9
    }
}
