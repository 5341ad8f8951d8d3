use std::fmt;

use crate::{BoundStats, Stats, TimeUnit};

/// Accumulates count, bounds, mean and standard deviation of interval samples.
///
/// Uses Welford's online algorithm: after each sample `x` (and after incrementing `count`),
///
/// ```text
/// delta = x - mean
/// mean += delta / count
/// M2   += (count - 1) * delta * delta / count
/// ```
///
/// where `M2` is the sum of squared deviations from the mean. Unlike accumulating a sum of
/// squares, this stays accurate over long sample streams.
///
/// # Example
///
/// ```
/// use stopwatch_stats::{Stats, VarBoundStats};
///
/// let mut stats = VarBoundStats::default();
/// for sample in [1.0, 3.0, 4.0, 2.0] {
///     stats.add_sample(sample);
/// }
///
/// assert_eq!(stats.count(), 4);
/// assert!((stats.mean() - 2.5).abs() < 1e-12);
/// assert!((stats.sum_squared_deviations() - 5.0).abs() < 1e-12);
/// assert!((stats.stddev() - 1.25_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VarBoundStats {
    bounds: BoundStats,
    mean: f64,
    sum_squared_deviations: f64,
}

impl VarBoundStats {
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

    /// The sum of squared deviations from the mean (Welford's `M2`). Never negative.
    #[must_use]
    pub fn sum_squared_deviations(&self) -> f64 {
        self.sum_squared_deviations
    }

    /// The population variance of the samples, or `+∞` if there are no samples.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts stay far below 2^52 in any realistic scenario"
    )]
    pub fn variance(&self) -> f64 {
        if self.bounds.is_empty() {
            f64::INFINITY
        } else {
            self.sum_squared_deviations / self.bounds.count() as f64
        }
    }

    /// The population standard deviation of the samples, or `+∞` if there are no samples.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// The count/min/max part of the statistics.
    #[must_use]
    pub fn bounds(&self) -> &BoundStats {
        &self.bounds
    }
}

impl Stats for VarBoundStats {
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts stay far below 2^52 in any realistic scenario"
    )]
    fn add_sample(&mut self, seconds: f64) {
        self.bounds.add_sample(seconds);

        let count = self.bounds.count() as f64;
        let delta = seconds - self.mean;

        self.mean += delta / count;
        self.sum_squared_deviations += ((count - 1.0) * delta) * delta / count;
    }

    fn count(&self) -> u64 {
        self.bounds.count()
    }
}

impl fmt::Display for VarBoundStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.bounds.is_empty() {
            let unit = TimeUnit::guess(self.mean);

            write!(
                f,
                "{}, std = {}, ",
                unit.display(self.mean),
                unit.display(self.stddev())
            )?;
        }

        self.bounds.fmt_bounds(f)
    }
}
