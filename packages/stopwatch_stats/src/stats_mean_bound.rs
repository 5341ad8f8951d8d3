use std::fmt;

use crate::{BoundStats, Stats, TimeUnit};

/// Accumulates count, bounds and the running mean of interval samples.
///
/// The mean is updated incrementally after every sample as `mean += (x - mean) / count`,
/// which avoids keeping a running sum that would lose precision as it grows.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{MeanBoundStats, Stats};
///
/// let mut stats = MeanBoundStats::default();
/// stats.add_sample(1.0);
/// stats.add_sample(2.0);
/// stats.add_sample(6.0);
///
/// assert_eq!(stats.mean(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanBoundStats {
    bounds: BoundStats,
    mean: f64,
}

impl MeanBoundStats {
    /// The number of samples added so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.bounds.count()
    }

    /// The smallest sample, or `+∞` if there are no samples.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.bounds.min()
    }

    /// The largest sample, or `-∞` if there are no samples.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.bounds.max()
    }

    /// The arithmetic mean of all samples, or zero if there are no samples.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The count/min/max part of the statistics.
    #[must_use]
    pub fn bounds(&self) -> &BoundStats {
        &self.bounds
    }
}

impl Stats for MeanBoundStats {
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts stay far below 2^52 in any realistic scenario"
    )]
    fn add_sample(&mut self, seconds: f64) {
        self.bounds.add_sample(seconds);

        let delta = seconds - self.mean;
        self.mean += delta / self.bounds.count() as f64;
    }

    fn count(&self) -> u64 {
        self.bounds.count()
    }
}

impl fmt::Display for MeanBoundStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.bounds.is_empty() {
            write!(f, "{}, ", TimeUnit::guess(self.mean).display(self.mean))?;
        }

        self.bounds.fmt_bounds(f)
    }
}
