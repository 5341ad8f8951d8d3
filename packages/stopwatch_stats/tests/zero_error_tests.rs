//! Clock zero-error estimation against the real operating system clocks.

use stopwatch_stats::{
    BasicTimer, CoarseClock, DEFAULT_ZERO_ERROR_ITERATIONS, DefaultTimer, HiResClock,
    MeanBoundStats, VarBoundStats, clock_zero_error,
};

#[test]
#[cfg_attr(miri, ignore)] // Miri does not model real time.
fn high_resolution_clock_has_measurable_overhead() {
    let zeros: MeanBoundStats = DefaultTimer::zero_error(DEFAULT_ZERO_ERROR_ITERATIONS);

    assert_eq!(zeros.count(), 1000);
    assert!(zeros.mean() > 0.0, "mean zero error was {}", zeros.mean());
    assert!(zeros.max() < 1.0);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri does not model real time.
fn high_resolution_clock_deviation_is_finite() {
    let zeros: VarBoundStats = clock_zero_error(&HiResClock, 500);

    assert_eq!(zeros.count(), 500);
    assert!(zeros.stddev().is_finite());
    assert!(zeros.min() >= 0.0);
}

#[cfg(unix)]
#[test]
#[cfg_attr(miri, ignore)] // Miri does not support clock_gettime on all targets.
fn monotonic_clock_has_measurable_overhead() {
    use stopwatch_stats::MonotonicClock;

    let zeros: MeanBoundStats = clock_zero_error(&MonotonicClock, DEFAULT_ZERO_ERROR_ITERATIONS);

    assert_eq!(zeros.count(), 1000);
    assert!(zeros.mean() > 0.0, "mean zero error was {}", zeros.mean());
    assert!(zeros.max() < 1.0);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri does not model real time.
fn coarse_clock_rarely_sees_a_second_pass() {
    // Adjacent queries land in the same second almost always, at most once crossing it.
    let zeros: MeanBoundStats = BasicTimer::zero_error(DEFAULT_ZERO_ERROR_ITERATIONS);

    assert_eq!(zeros.count(), 1000);
    assert!(zeros.min() >= 0.0);
    assert!(zeros.max() <= 1.0);

    let direct: MeanBoundStats = clock_zero_error(&CoarseClock, 10);
    assert_eq!(direct.count(), 10);
}
