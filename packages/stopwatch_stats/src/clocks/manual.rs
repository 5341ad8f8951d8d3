use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{Clock, ERR_POISONED_LOCK};

#[derive(Debug)]
struct ManualClockState {
    now: Duration,

    // Added to `now` after every query, to simulate a clock that moves on its own.
    auto_advance: Duration,
}

/// A clock whose time only moves when told to.
///
/// This allows tests and simulations to produce exact, repeatable intervals. Instants are
/// the time elapsed since the clock was created. Multiple clones of the same `ManualClock`
/// share the same underlying time, so a test can keep a clone and advance the time seen by
/// a timer that owns another clone.
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
/// clock.advance(Duration::from_millis(250));
/// timer.stop();
///
/// assert_eq!(timer.stats().mean(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    state: Arc<Mutex<ManualClockState>>,
}

impl ManualClock {
    /// Creates a clock that stands still until advanced.
    #[must_use]
    pub fn new() -> Self {
        Self::with_auto_advance(Duration::ZERO)
    }

    /// Creates a clock that moves forward by `step` after every call to `now()`.
    #[must_use]
    pub fn with_auto_advance(step: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualClockState {
                now: Duration::ZERO,
                auto_advance: step,
            })),
        }
    }

    /// Moves the clock forward.
    ///
    /// This affects all clones of this clock.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);

        state.now = state
            .now
            .checked_add(by)
            .expect("manual clock advanced beyond Duration::MAX - unrealistic test scenario");
    }

    /// The time elapsed since the clock was created, as seen by this clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.lock().expect(ERR_POISONED_LOCK).now
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    type Instant = Duration;

    fn now(&self) -> Duration {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);

        let now = state.now;
        state.now = now
            .checked_add(state.auto_advance)
            .expect("manual clock advanced beyond Duration::MAX - unrealistic test scenario");

        now
    }

    fn interval(&self, start: Duration, end: Duration) -> f64 {
        end.saturating_sub(start).as_secs_f64()
    }
}
