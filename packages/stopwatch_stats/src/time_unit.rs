use std::fmt;

/// A unit of time used to present interval statistics in human-friendly form.
///
/// # Example
///
/// ```
/// use stopwatch_stats::TimeUnit;
///
/// let unit = TimeUnit::guess(0.002);
///
/// assert_eq!(unit.symbol(), "ms");
/// assert_eq!(unit.display(0.002).to_string(), "2.000 ms");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeUnit {
    symbol: &'static str,
    seconds_per_unit: f64,
}

impl TimeUnit {
    const NANOSECONDS: Self = Self::new("ns", 1e-9);
    const MICROSECONDS: Self = Self::new("µs", 1e-6);
    const MILLISECONDS: Self = Self::new("ms", 1e-3);
    const SECONDS: Self = Self::new("s", 1.0);
    const MINUTES: Self = Self::new("m", 60.0);
    const HOURS: Self = Self::new("h", 3600.0);

    const fn new(symbol: &'static str, seconds_per_unit: f64) -> Self {
        Self {
            symbol,
            seconds_per_unit,
        }
    }

    /// Picks a unit in which a typical value of `scale` seconds reads naturally.
    ///
    /// Each unit is used up to 250 of itself before switching to the next larger one,
    /// except that seconds are used up to 400 and minutes up to 125 (7500 seconds).
    /// A scale of exactly zero is presented in seconds.
    #[must_use]
    pub fn guess(scale: f64) -> Self {
        if scale == 0.0 {
            Self::SECONDS
        } else if scale < 250e-9 {
            Self::NANOSECONDS
        } else if scale < 250e-6 {
            Self::MICROSECONDS
        } else if scale < 250e-3 {
            Self::MILLISECONDS
        } else if scale < 400.0 {
            Self::SECONDS
        } else if scale < 7500.0 {
            Self::MINUTES
        } else {
            Self::HOURS
        }
    }

    /// The short symbol of the unit, e.g. `"ms"`.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Converts a value in seconds into this unit.
    #[must_use]
    pub fn from_seconds(&self, seconds: f64) -> f64 {
        seconds / self.seconds_per_unit
    }

    /// Returns a displayable form of `seconds` expressed in this unit, e.g. `"1.500 µs"`.
    #[must_use]
    pub fn display(&self, seconds: f64) -> impl fmt::Display {
        InUnit {
            value: self.from_seconds(seconds),
            symbol: self.symbol,
        }
    }
}

struct InUnit {
    value: f64,
    symbol: &'static str,
}

impl fmt::Display for InUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.value, self.symbol)
    }
}
