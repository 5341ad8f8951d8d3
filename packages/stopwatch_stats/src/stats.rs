use std::fmt::{Debug, Display};

/// Digests a stream of interval samples into running summary statistics.
///
/// Every implementation uses O(1) time and O(1) space per sample - raw samples are never
/// buffered. Samples are interval lengths in seconds.
///
/// The `Display` implementation renders the statistics as the body of a report line, e.g.
/// `1.250 µs, std = 0.250 µs, 1.000 µs <= t <= 1.500 µs (n=2)`.
///
/// Four conformance levels are provided:
///
/// | Type                                        | count | min/max | mean | variance |
/// |---------------------------------------------|-------|---------|------|----------|
/// | [`NullStats`](crate::NullStats)             |       |         |      |          |
/// | [`BoundStats`](crate::BoundStats)           | ✓     | ✓       |      |          |
/// | [`MeanBoundStats`](crate::MeanBoundStats)   | ✓     | ✓       | ✓    |          |
/// | [`VarBoundStats`](crate::VarBoundStats)     | ✓     | ✓       | ✓    | ✓        |
pub trait Stats: Clone + Debug + Default + Display + Send + 'static {
    /// Adds one interval sample, in seconds.
    fn add_sample(&mut self, seconds: f64);

    /// The number of samples added so far.
    ///
    /// Accumulators that do not count samples always return zero.
    fn count(&self) -> u64;
}
