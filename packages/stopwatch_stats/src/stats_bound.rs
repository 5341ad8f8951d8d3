use std::fmt;

use crate::{Stats, TimeUnit};

/// Accumulates the count and the smallest and largest of interval samples.
///
/// Before the first sample, [`min()`](Self::min) is `+∞` and [`max()`](Self::max) is `-∞`,
/// so the first sample always replaces both.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{BoundStats, Stats};
///
/// let mut stats = BoundStats::default();
/// stats.add_sample(0.3);
/// stats.add_sample(0.1);
///
/// assert_eq!(stats.count(), 2);
/// assert_eq!(stats.min(), 0.1);
/// assert_eq!(stats.max(), 0.3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundStats {
    count: u64,
    min: f64,
    max: f64,
}

impl BoundStats {
    /// The number of samples added so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The smallest sample, or `+∞` if there are no samples.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The largest sample, or `-∞` if there are no samples.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether no samples have been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Writes the `"<min> <= t <= <max> (n=<count>)"` part of a report.
    ///
    /// Shared with the richer accumulators, which prefix it with their own fields.
    pub(crate) fn fmt_bounds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(n=0)");
        }

        let unit = TimeUnit::guess(0.5 * (self.min + self.max));

        write!(
            f,
            "{} <= t <= {} (n={})",
            unit.display(self.min),
            unit.display(self.max),
            self.count
        )
    }
}

impl Default for BoundStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Stats for BoundStats {
    #[inline]
    fn add_sample(&mut self, seconds: f64) {
        self.count = self
            .count
            .checked_add(1)
            .expect("sample count overflows u64 - this indicates an unrealistic scenario");

        if seconds < self.min {
            self.min = seconds;
        }
        if seconds > self.max {
            self.max = seconds;
        }
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for BoundStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_bounds(f)
    }
}
