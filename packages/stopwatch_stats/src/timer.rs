use crate::{
    Clock, CoarseClock, ConcurrentManager, CorrelationManager, HiResClock, MeanBoundStats,
    NullManager, NullReporter, Reporter, ScopedStartStop, SerialManager, Stats, StderrReporter,
    TimerBuilder, VarBoundStats, clock_zero_error,
};

/// Timer that does nothing at all. Every operation compiles down to nothing.
pub type NullTimer = Timer<NullManager, NullReporter>;

/// Single-threaded timer with whole-second resolution, reporting mean and bounds to stderr.
pub type BasicTimer = Timer<SerialManager<CoarseClock, MeanBoundStats>, StderrReporter>;

/// Single-threaded high-resolution timer, reporting mean, deviation and bounds to stderr.
pub type DefaultTimer = Timer<SerialManager<HiResClock, VarBoundStats>, StderrReporter>;

/// High-resolution timer shared between threads, reporting mean, deviation and bounds
/// to stderr.
pub type ThreadedTimer = Timer<ConcurrentManager<HiResClock, VarBoundStats>, StderrReporter>;

/// A labeled stopwatch that accumulates statistics over repeated measurements and reports
/// them once, when dropped.
///
/// Each `start()` is paired with a subsequent `stop()` by the correlation manager `M`, which
/// also decides the clock and statistics types. The reporter `R` receives the final statistics.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{DefaultTimer, Timer};
///
/// let timer = DefaultTimer::new("checksum");
///
/// for chunk in [&b"abc"[..], &b"defgh"[..]] {
///     timer.start();
///     std::hint::black_box(chunk.iter().map(|b| u32::from(*b)).sum::<u32>());
///     timer.stop();
/// }
///
/// let stats = timer.stats();
/// assert_eq!(stats.count(), 2);
/// assert!(stats.min() <= stats.mean() && stats.mean() <= stats.max());
/// ```
#[derive(Debug)]
pub struct Timer<M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    label: String,
    clock: M::Clock,
    manager: M,
    reporter: R,
}

impl<M, R> Timer<M, R>
where
    M: CorrelationManager,
    R: Reporter + Default,
    M::Clock: Default,
{
    /// Creates a timer with the given label, using the default clock and reporter.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_parts(label.into(), M::Clock::default(), R::default())
    }
}

impl<M, R> Timer<M, R>
where
    M: CorrelationManager,
    R: Reporter,
    M::Clock: Default,
{
    /// Creates a timer with the given label and reporter, using the default clock.
    ///
    /// # Example
    ///
    /// ```
    /// use stopwatch_stats::{HiResClock, SerialManager, StreamReporter, Timer, VarBoundStats};
    ///
    /// let timer = Timer::<SerialManager<HiResClock, VarBoundStats>, _>::with_reporter(
    ///     "upload",
    ///     StreamReporter::new(std::io::sink()),
    /// );
    ///
    /// assert_eq!(timer.label(), "upload");
    /// ```
    #[must_use]
    pub fn with_reporter(label: impl Into<String>, reporter: R) -> Self {
        Self::from_parts(label.into(), M::Clock::default(), reporter)
    }

    /// Estimates the time delay between adjacent queries of this timer's clock type.
    ///
    /// See [`clock_zero_error()`] for details.
    #[must_use]
    pub fn zero_error<S: Stats>(iterations: u32) -> S {
        clock_zero_error(&M::Clock::default(), iterations)
    }
}

impl<M, R> Timer<M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    /// Starts building a timer with a custom clock or reporter.
    ///
    /// # Example
    ///
    /// ```
    /// use stopwatch_stats::{
    ///     HiResClock, SerialManager, StreamReporter, Timer, VarBoundStats,
    /// };
    ///
    /// let timer = Timer::<SerialManager<HiResClock, VarBoundStats>, StreamReporter>::builder()
    ///     .label("compress")
    ///     .reporter(StreamReporter::new(std::io::sink()))
    ///     .build();
    ///
    /// assert_eq!(timer.label(), "compress");
    /// ```
    #[must_use]
    pub fn builder() -> TimerBuilder<M, R> {
        TimerBuilder::new()
    }

    pub(crate) fn from_parts(label: String, clock: M::Clock, reporter: R) -> Self {
        Self {
            label,
            clock,
            manager: M::default(),
            reporter,
        }
    }

    /// Starts a measurement.
    ///
    /// Starting again before stopping discards the earlier start.
    #[inline]
    pub fn start(&self) {
        self.manager.record_start(self.clock.now());
    }

    /// Ends the measurement started by the most recent `start()` and records its interval.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the timer was never started (on the current thread, for
    /// timers shared between threads). Release builds record nothing in that case.
    #[inline]
    pub fn stop(&self) {
        let now = self.clock.now();
        self.manager.update_stats(&self.clock, now);
    }

    /// Starts a measurement that is stopped when the returned guard is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use stopwatch_stats::{HiResClock, MeanBoundStats, NullReporter, SerialManager, Timer};
    ///
    /// let timer = Timer::<SerialManager<HiResClock, MeanBoundStats>, NullReporter>::new("lookup");
    ///
    /// {
    ///     let _scope = timer.scoped_start();
    ///     std::hint::black_box([3, 1, 2].iter().max());
    /// }
    ///
    /// assert_eq!(timer.stats().count(), 1);
    /// ```
    pub fn scoped_start(&self) -> ScopedStartStop<'_, M, R> {
        ScopedStartStop::new(self)
    }

    /// Returns a snapshot of the statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> M::Stats {
        self.manager.stats()
    }

    /// The label that identifies this timer in its report.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Delivers the statistics accumulated so far to `reporter`.
    pub(crate) fn report_to<Q: Reporter>(&self, reporter: &Q) {
        reporter.report(&self.label, &self.manager.stats());
    }

    /// Delivers the statistics accumulated so far to the timer's own reporter.
    pub(crate) fn report(&self) {
        self.report_to(&self.reporter);
    }
}

impl<M, R> Drop for Timer<M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    fn drop(&mut self) {
        self.report();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;
    use crate::{BoundStats, ManualClock, NullStats, StreamReporter};

    assert_impl_all!(NullTimer: Send, Sync);
    assert_impl_all!(DefaultTimer: Send);
    assert_not_impl_any!(DefaultTimer: Sync);
    assert_not_impl_any!(BasicTimer: Sync);
    assert_impl_all!(ThreadedTimer: Send, Sync);

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    type ManualTimer = Timer<SerialManager<ManualClock, MeanBoundStats>, StreamReporter>;

    fn manual_timer(label: &str, clock: &ManualClock, output: &SharedBuffer) -> ManualTimer {
        ManualTimer::builder()
            .label(label)
            .clock(clock.clone())
            .reporter(StreamReporter::new(output.clone()))
            .build()
    }

    #[test]
    fn measures_with_injected_clock() {
        let clock = ManualClock::new();
        let output = SharedBuffer::default();
        let timer = manual_timer("step", &clock, &output);

        for millis in [2, 4] {
            timer.start();
            clock.advance(Duration::from_millis(millis));
            timer.stop();
        }

        let stats = timer.stats();
        assert_eq!(stats.count(), 2);
        assert!((stats.mean() - 0.003).abs() < 1e-12);
        assert!((stats.min() - 0.002).abs() < 1e-12);
        assert!((stats.max() - 0.004).abs() < 1e-12);
    }

    #[test]
    fn reports_once_on_drop() {
        let clock = ManualClock::new();
        let output = SharedBuffer::default();

        {
            let timer = manual_timer("step", &clock, &output);

            for millis in [2, 4] {
                timer.start();
                clock.advance(Duration::from_millis(millis));
                timer.stop();
            }

            assert_eq!(output.contents(), "");
        }

        assert_eq!(
            output.contents(),
            "step: 3.000 ms, 2.000 ms <= t <= 4.000 ms (n=2)\n"
        );
    }

    #[test]
    fn unused_timer_reports_empty_stats() {
        let output = SharedBuffer::default();

        drop(manual_timer("never", &ManualClock::new(), &output));

        assert_eq!(output.contents(), "never: (n=0)\n");
    }

    #[test]
    fn new_uses_label() {
        let timer = Timer::<SerialManager<ManualClock, BoundStats>, NullReporter>::new("named");

        assert_eq!(timer.label(), "named");
        assert_eq!(timer.stats().count(), 0);
    }

    #[test]
    fn scoped_start_stops_at_end_of_scope() {
        let clock = ManualClock::new();
        let output = SharedBuffer::default();
        let timer = manual_timer("scoped", &clock, &output);

        {
            let _scope = timer.scoped_start();
            clock.advance(Duration::from_secs(2));
        }

        let stats = timer.stats();
        assert_eq!(stats.count(), 1);
        assert!((stats.max() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn null_timer_has_no_effect() {
        let timer = NullTimer::new("disabled");

        for _ in 0..1000 {
            timer.start();
            timer.stop();
            let _scope = timer.scoped_start();
        }

        assert_eq!(timer.stats(), NullStats);
        assert_eq!(timer.stats().count(), 0);
    }

    #[test]
    fn zero_error_of_manual_clock_is_zero() {
        let zeros: MeanBoundStats =
            Timer::<SerialManager<ManualClock, MeanBoundStats>, NullReporter>::zero_error(100);

        assert_eq!(zeros.count(), 100);
        assert_eq!(zeros.max().to_bits(), 0.0_f64.to_bits());
        assert_eq!(zeros.mean().to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn with_reporter_needs_no_default_reporter() {
        let output = SharedBuffer::default();

        {
            let timer = Timer::<SerialManager<ManualClock, BoundStats>, _>::with_reporter(
                "direct",
                StreamReporter::new(output.clone()),
            );

            timer.start();
            timer.stop();
        }

        assert_eq!(
            output.contents(),
            "direct: 0.000 s <= t <= 0.000 s (n=1)\n"
        );
    }

    #[test]
    fn zero_error_needs_no_default_reporter() {
        let zeros: BoundStats =
            Timer::<SerialManager<ManualClock, BoundStats>, StreamReporter>::zero_error(5);

        assert_eq!(zeros.count(), 5);
        assert_eq!(zeros.max().to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn zero_error_of_null_timer() {
        let zeros: BoundStats = NullTimer::zero_error(10);

        assert_eq!(zeros.count(), 10);
        assert_eq!(zeros.max().to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Slow under Miri.
    fn threaded_timer_shared_through_arc() {
        let timer = Arc::new(
            Timer::<ConcurrentManager<HiResClock, VarBoundStats>, NullReporter>::new("arc"),
        );

        let handles = (0..4)
            .map(|_| {
                let timer = Arc::clone(&timer);
                thread::spawn(move || {
                    for _ in 0..50 {
                        timer.start();
                        timer.stop();
                    }
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(timer.stats().count(), 200);
    }
}
