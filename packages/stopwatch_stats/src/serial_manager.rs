use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;

use crate::{Clock, CorrelationManager, Stats};

/// Correlation manager for timers used from a single thread.
///
/// Holds one start instant, overwritten by every `start()`. There is no locking, which
/// makes this the cheapest real manager. The type is not `Sync`, so a timer using it cannot
/// be shared between threads.
///
/// Each `stop()` measures from the most recent `start()`. Stopping twice after a single
/// start measures twice from the same start instant.
pub struct SerialManager<C, S>
where
    C: Clock,
    S: Stats,
{
    last_start: Cell<Option<C::Instant>>,
    stats: RefCell<S>,

    _clock: PhantomData<C>,
}

impl<C, S> CorrelationManager for SerialManager<C, S>
where
    C: Clock,
    S: Stats,
{
    type Clock = C;
    type Stats = S;

    #[inline]
    fn record_start(&self, now: C::Instant) {
        self.last_start.set(Some(now));
    }

    #[inline]
    fn update_stats(&self, clock: &C, now: C::Instant) {
        let last_start = self.last_start.get();

        debug_assert!(
            last_start.is_some(),
            "timer stopped without having been started"
        );

        if let Some(start) = last_start {
            self.stats
                .borrow_mut()
                .add_sample(clock.interval(start, now));
        }
    }

    fn stats(&self) -> S {
        self.stats.borrow().clone()
    }
}

impl<C, S> Default for SerialManager<C, S>
where
    C: Clock,
    S: Stats,
{
    fn default() -> Self {
        Self {
            last_start: Cell::new(None),
            stats: RefCell::new(S::default()),
            _clock: PhantomData,
        }
    }
}

impl<C, S> fmt::Debug for SerialManager<C, S>
where
    C: Clock,
    S: Stats,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialManager")
            .field("last_start", &self.last_start.get())
            .field("stats", &self.stats)
            .finish()
    }
}
