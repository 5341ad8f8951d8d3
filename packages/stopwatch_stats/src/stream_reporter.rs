use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use crate::{ERR_POISONED_LOCK, Error, Reporter, Result, Stats, write_report_line};

type Destination = Mutex<Box<dyn Write + Send>>;

/// Reporter that writes the report line to a caller-provided destination.
///
/// Clones of a `StreamReporter` write to the same destination, so one destination can collect
/// the reports of many timers. Writes from different timers never interleave within a line.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
///
/// use stopwatch_stats::{HiResClock, MeanBoundStats, SerialManager, StreamReporter, Timer};
///
/// #[derive(Clone, Default)]
/// struct Collected(Arc<Mutex<Vec<u8>>>);
///
/// impl Write for Collected {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.lock().unwrap().write(buf)
///     }
///
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let collected = Collected::default();
///
/// {
///     let timer = Timer::<SerialManager<HiResClock, MeanBoundStats>, StreamReporter>::builder()
///         .label("render")
///         .reporter(StreamReporter::new(collected.clone()))
///         .build();
///
///     timer.start();
///     timer.stop();
/// }
///
/// let output = String::from_utf8(collected.0.lock().unwrap().clone()).unwrap();
/// assert!(output.starts_with("render: "));
/// assert!(output.ends_with("(n=1)\n"));
/// ```
#[derive(Clone)]
pub struct StreamReporter {
    destination: Arc<Destination>,
}

impl StreamReporter {
    /// Creates a reporter that writes to `destination`.
    #[must_use]
    pub fn new(destination: impl Write + Send + 'static) -> Self {
        Self {
            destination: Arc::new(Mutex::new(Box::new(destination))),
        }
    }
}

impl Reporter for StreamReporter {
    fn report<S: Stats>(&self, label: &str, stats: &S) {
        let mut destination = self.destination.lock().expect(ERR_POISONED_LOCK);
        write_report_line(&mut *destination, label, stats);
    }
}

impl fmt::Debug for StreamReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamReporter").finish_non_exhaustive()
    }
}

static GLOBAL_DESTINATION: OnceLock<Destination> = OnceLock::new();

/// Sets the process-wide destination used by [`GlobalStreamReporter`].
///
/// The destination can be set only once per process and cannot be replaced afterwards.
///
/// # Errors
///
/// Returns [`Error::DestinationAlreadySet`] if a destination has already been set.
pub fn set_global_destination(destination: impl Write + Send + 'static) -> Result<()> {
    GLOBAL_DESTINATION
        .set(Mutex::new(Box::new(destination)))
        .map_err(|_rejected| Error::DestinationAlreadySet)
}

/// Reporter that writes the report line to the process-wide destination set through
/// [`set_global_destination()`].
///
/// This lets timers be declared with a reporter type alone, without passing a destination to
/// every timer. If a timer reports before a destination has been set, the report is discarded
/// and a `tracing` warning is emitted.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct GlobalStreamReporter;

impl Reporter for GlobalStreamReporter {
    fn report<S: Stats>(&self, label: &str, stats: &S) {
        let Some(destination) = GLOBAL_DESTINATION.get() else {
            tracing::warn!(
                timer = label,
                "global report destination not set, discarding timer report"
            );
            return;
        };

        let mut destination = destination.lock().expect(ERR_POISONED_LOCK);
        write_report_line(&mut *destination, label, stats);
    }
}
