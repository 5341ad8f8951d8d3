use std::sync::{Mutex, OnceLock};

use crate::{ERR_POISONED_LOCK, Reporter, ThreadedTimer};

// Every static timer that has been used at least once, in order of first use.
static STATIC_TIMERS: Mutex<Vec<&'static StaticTimer>> = Mutex::new(Vec::new());

/// A [`ThreadedTimer`] that lives in a `static` and is created on first use.
///
/// Timers in statics are never dropped, so they never report on their own. Every static timer
/// that has been used is instead reported by [`report_static_timers()`], which the program
/// calls once its measurements are done (typically at the end of `main`).
///
/// The [`static_scoped!`](crate::static_scoped) macro declares one of these per callsite and
/// measures the rest of the enclosing block with it, which covers most uses.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{StaticTimer, report_static_timers};
///
/// static CHECKSUM: StaticTimer = StaticTimer::new("checksum");
///
/// fn checksum(data: &[u8]) -> u32 {
///     let _scope = CHECKSUM.timer().scoped_start();
///     data.iter().map(|b| u32::from(*b)).sum()
/// }
///
/// checksum(b"abc");
/// checksum(b"defgh");
/// assert_eq!(CHECKSUM.timer().stats().count(), 2);
///
/// // Prints "checksum: ... (n=2)" to stderr.
/// report_static_timers();
/// ```
#[derive(Debug)]
pub struct StaticTimer {
    label: &'static str,
    timer: OnceLock<ThreadedTimer>,
}

impl StaticTimer {
    /// Declares a static timer with the given label.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            timer: OnceLock::new(),
        }
    }

    /// Returns the timer, creating it on first use.
    #[must_use]
    pub fn timer(&'static self) -> &'static ThreadedTimer {
        self.timer.get_or_init(|| {
            STATIC_TIMERS.lock().expect(ERR_POISONED_LOCK).push(self);
            ThreadedTimer::new(self.label)
        })
    }
}

/// Reports the statistics of every static timer that has been used, each through its own
/// reporter.
///
/// Timers are reported in order of first use. Each call reports a fresh snapshot, so calling
/// this more than once reports the same timers again.
pub fn report_static_timers() {
    for timer in used_static_timers() {
        timer.report();
    }
}

/// Reports the statistics of every static timer that has been used to `reporter` instead of
/// the timers' own reporters.
///
/// Timers are reported in order of first use.
pub fn report_static_timers_to<Q: Reporter>(reporter: &Q) {
    for timer in used_static_timers() {
        timer.report_to(reporter);
    }
}

fn used_static_timers() -> Vec<&'static ThreadedTimer> {
    // Collected up front so no lock is held while reporters write.
    STATIC_TIMERS
        .lock()
        .expect(ERR_POISONED_LOCK)
        .iter()
        .filter_map(|static_timer| static_timer.timer.get())
        .collect()
}

/// Measures the rest of the enclosing block with a timer that belongs to this callsite.
///
/// The timer is a [`StaticTimer`] declared by the macro, so it is created once and then shared
/// by every pass through the callsite, from any thread. Its statistics are reported by
/// [`report_static_timers()`](crate::report_static_timers).
///
/// The label must be a `&'static str` constant expression.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{report_static_timers, static_scoped};
///
/// fn lookup(keys: &[u32], key: u32) -> bool {
///     static_scoped!("lookup");
///     keys.contains(&key)
/// }
///
/// for key in 0..10 {
///     lookup(&[2, 3, 5, 7], key);
/// }
///
/// // Prints "lookup: ... (n=10)" to stderr.
/// report_static_timers();
/// ```
#[macro_export]
macro_rules! static_scoped {
    ($label:expr) => {
        let _static_timer_scope = {
            static CALLSITE_TIMER: $crate::StaticTimer = $crate::StaticTimer::new($label);
            CALLSITE_TIMER.timer().scoped_start()
        };
    };
}
