use crate::{CorrelationManager, Reporter, Timer};

/// Measures one interval of a [`Timer`], from creation until drop.
///
/// Created by [`Timer::scoped_start()`]. The timer is stopped exactly once when the guard is
/// dropped, whether the scope ends normally, through an early return or `?`, or by a panic
/// unwinding through it.
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and drop"]
pub struct ScopedStartStop<'a, M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    timer: &'a Timer<M, R>,
}

impl<'a, M, R> ScopedStartStop<'a, M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    pub(crate) fn new(timer: &'a Timer<M, R>) -> Self {
        timer.start();

        Self { timer }
    }
}

impl<M, R> Drop for ScopedStartStop<'_, M, R>
where
    M: CorrelationManager,
    R: Reporter,
{
    fn drop(&mut self) {
        self.timer.stop();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::num::ParseIntError;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::time::Duration;

    use super::*;
    use crate::{BoundStats, ManualClock, NullReporter, SerialManager};

    type ManualTimer = Timer<SerialManager<ManualClock, BoundStats>, NullReporter>;

    fn timer_with(clock: &ManualClock) -> ManualTimer {
        ManualTimer::builder()
            .label("scoped")
            .clock(clock.clone())
            .build()
    }

    fn parse_with_timer(
        timer: &ManualTimer,
        clock: &ManualClock,
        input: &str,
    ) -> Result<u32, ParseIntError> {
        let _scope = timer.scoped_start();
        clock.advance(Duration::from_secs(1));

        let value: u32 = input.parse()?;
        clock.advance(Duration::from_secs(1));

        Ok(value)
    }

    #[test]
    fn stops_on_every_exit_path() {
        let clock = ManualClock::new();
        let timer = timer_with(&clock);

        parse_with_timer(&timer, &clock, "42").unwrap();
        parse_with_timer(&timer, &clock, "forty-two").unwrap_err();

        let stats = timer.stats();
        assert_eq!(stats.count(), 2);
        assert!((stats.min() - 1.0).abs() < 1e-12);
        assert!((stats.max() - 2.0).abs() < 1e-12);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri does not support catching panics on all targets.
    fn stops_when_panic_unwinds() {
        let clock = ManualClock::new();
        let timer = timer_with(&clock);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _scope = timer.scoped_start();
            clock.advance(Duration::from_secs(3));
            panic!("work failed");
        }));

        assert!(result.is_err());
        assert_eq!(timer.stats().count(), 1);
        assert!((timer.stats().max() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn nested_guards_on_separate_timers() {
        let clock = ManualClock::new();
        let outer = timer_with(&clock);
        let inner = timer_with(&clock);

        {
            let _outer = outer.scoped_start();
            clock.advance(Duration::from_secs(1));
            {
                let _inner = inner.scoped_start();
                clock.advance(Duration::from_secs(1));
            }
        }

        assert!((outer.stats().max() - 2.0).abs() < 1e-12);
        assert!((inner.stats().max() - 1.0).abs() < 1e-12);
    }
}
