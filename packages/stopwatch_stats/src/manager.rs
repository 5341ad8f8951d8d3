use std::fmt::Debug;

use crate::{Clock, Stats};

/// Shorthand for the instant type of the clock used by a correlation manager.
pub type ManagerInstant<M> = <<M as CorrelationManager>::Clock as Clock>::Instant;

/// Pairs each `start()` of a timer with the matching `stop()` and feeds the measured
/// interval into a statistics accumulator.
///
/// The manager owns the accumulator of its timer. Per timer, the state machine is
/// `idle -> started -> idle`: [`record_start()`][Self::record_start] remembers an instant
/// and [`update_stats()`][Self::update_stats] measures from it to the stop instant.
///
/// Calling `update_stats()` without a preceding `record_start()` is a caller error.
/// Implementations may assert against it in debug builds but do not check it otherwise.
///
/// Implementations:
///
/// * [`SerialManager`](crate::SerialManager) - one thread, no locking.
/// * [`ConcurrentManager`](crate::ConcurrentManager) - any number of threads sharing one timer.
/// * [`NullManager`](crate::NullManager) - does nothing at all.
pub trait CorrelationManager: Debug + Default {
    /// The clock whose instants this manager correlates.
    type Clock: Clock;

    /// The accumulator that receives the measured intervals.
    type Stats: Stats;

    /// Makes a note of the instant at which the stopwatch was started.
    fn record_start(&self, now: ManagerInstant<Self>);

    /// Measures the interval from the matching start instant to `now` and adds it
    /// to the statistics.
    fn update_stats(&self, clock: &Self::Clock, now: ManagerInstant<Self>);

    /// Returns a snapshot of the statistics accumulated so far.
    fn stats(&self) -> Self::Stats;
}
