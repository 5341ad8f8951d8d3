use std::marker::PhantomData;

use crate::{CorrelationManager, Reporter, Timer};

/// Creates a [`Timer`] with a custom clock or reporter.
///
/// A label is required. The clock falls back to its `Default` value when not provided. The
/// reporter falls back to its `Default` value only when none was provided, so reporters that
/// need a destination (and have no `Default`) can still be used by passing them to
/// [`reporter()`](Self::reporter).
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use stopwatch_stats::{ManualClock, NullReporter, SerialManager, Timer, VarBoundStats};
///
/// let clock = ManualClock::new();
///
/// let timer = Timer::<SerialManager<ManualClock, VarBoundStats>, NullReporter>::builder()
///     .label("simulated")
///     .clock(clock.clone())
///     .build();
///
/// timer.start();
/// clock.advance(Duration::from_millis(500));
/// timer.stop();
///
/// assert_eq!(timer.stats().max(), 0.5);
/// ```
#[derive(Debug)]
pub struct TimerBuilder<M, R, P = DefaultReporter>
where
    M: CorrelationManager,
    R: Reporter,
{
    label: Option<String>,
    clock: Option<M::Clock>,

    // Either `DefaultReporter` or the reporter itself, once provided.
    reporter: P,

    _reporter: PhantomData<R>,
}

/// Marks a [`TimerBuilder`] that has not been given a reporter.
///
/// Building from this state creates the reporter with `Default`.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct DefaultReporter;

impl<M, R> TimerBuilder<M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    pub(crate) fn new() -> Self {
        Self {
            label: None,
            clock: None,
            reporter: DefaultReporter,
            _reporter: PhantomData,
        }
    }
}

impl<M, R, P> TimerBuilder<M, R, P>
where
    M: CorrelationManager,
    R: Reporter,
{
    /// Sets the label that identifies the timer in its report. Required.
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Sets the clock the timer samples instants from.
    #[must_use]
    pub fn clock(self, clock: M::Clock) -> Self {
        Self {
            clock: Some(clock),
            ..self
        }
    }

    /// Sets the reporter that receives the statistics when the timer is dropped.
    #[must_use]
    pub fn reporter(self, reporter: R) -> TimerBuilder<M, R, R> {
        TimerBuilder {
            label: self.label,
            clock: self.clock,
            reporter,
            _reporter: PhantomData,
        }
    }

    fn take_label(label: Option<String>) -> String {
        label.expect("a timer label must be set before building the timer")
    }
}

impl<M, R> TimerBuilder<M, R, DefaultReporter>
where
    M: CorrelationManager,
    R: Reporter + Default,
    M::Clock: Default,
{
    /// Creates the timer with a default reporter.
    ///
    /// # Panics
    ///
    /// Panics if no label has been set.
    #[must_use]
    pub fn build(self) -> Timer<M, R> {
        let label = Self::take_label(self.label);

        Timer::from_parts(label, self.clock.unwrap_or_default(), R::default())
    }
}

impl<M, R> TimerBuilder<M, R, R>
where
    M: CorrelationManager,
    R: Reporter,
    M::Clock: Default,
{
    /// Creates the timer with the provided reporter.
    ///
    /// # Panics
    ///
    /// Panics if no label has been set.
    #[must_use]
    pub fn build(self) -> Timer<M, R> {
        let label = Self::take_label(self.label);

        Timer::from_parts(label, self.clock.unwrap_or_default(), self.reporter)
    }
}
