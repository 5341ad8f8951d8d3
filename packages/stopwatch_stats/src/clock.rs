//! The clock abstraction that timers sample instants from.

use std::fmt::Debug;

use crate::Stats;

/// Number of back-to-back clock queries used by [`clock_zero_error()`] when the caller has
/// no specific preference.
pub const DEFAULT_ZERO_ERROR_ITERATIONS: u32 = 1000;

/// A source of instants that can measure the time between two of them.
///
/// Instants are only meaningful relative to other instants produced by the same clock type.
/// For interval statistics to be correct, the clock must be monotonic: an instant captured
/// later in real time must never produce a negative interval relative to an earlier one.
/// [`CoarseClock`](crate::CoarseClock) is the one exception offered by this crate and
/// is documented as a lower quality option.
///
/// Clocks are stateless policy objects in the common case. They are shared by all the
/// threads using a timer, so they must be `Send + Sync`.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{Clock, HiResClock};
///
/// let clock = HiResClock;
///
/// let start = clock.now();
/// std::hint::black_box((0..1000).sum::<u64>());
/// let end = clock.now();
///
/// assert!(clock.interval(start, end) >= 0.0);
/// ```
pub trait Clock: Debug + Send + Sync + 'static {
    /// A point in time captured by this clock.
    type Instant: Copy + Debug + Send + Sync + 'static;

    /// Captures the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of seconds that elapsed between `start` and `end`.
    fn interval(&self, start: Self::Instant, end: Self::Instant) -> f64;
}

/// Estimates the time delay between adjacent queries of a clock.
///
/// The clock is queried twice back-to-back `iterations` times and each (near-zero) interval
/// is fed into a fresh accumulator of type `S`. The result quantifies the overhead and
/// resolution floor of the clock itself, which is useful for judging how short an interval
/// can be measured meaningfully.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{
///     DEFAULT_ZERO_ERROR_ITERATIONS, HiResClock, MeanBoundStats, clock_zero_error,
/// };
///
/// let zeros: MeanBoundStats = clock_zero_error(&HiResClock, DEFAULT_ZERO_ERROR_ITERATIONS);
///
/// assert_eq!(zeros.count(), 1000);
/// assert!(zeros.max() < 1.0);
/// ```
#[must_use]
pub fn clock_zero_error<C, S>(clock: &C, iterations: u32) -> S
where
    C: Clock,
    S: Stats,
{
    let mut zeros = S::default();

    for _ in 0..iterations {
        let t0 = clock.now();
        let t1 = clock.now();
        zeros.add_sample(clock.interval(t0, t1));
    }

    zeros
}
