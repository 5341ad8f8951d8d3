use std::fmt::Debug;
use std::io::{self, Write};

use crate::Stats;

/// Receives the final statistics of a timer when the timer is dropped.
///
/// A report is a single line of the form `<label>: <statistics>`, where the statistics are
/// rendered through their `Display` implementation. Reporting never fails the caller: a
/// destination that cannot be written to is logged as a `tracing` warning and the report
/// is discarded.
///
/// Reporters are shared by every thread that uses a timer, so they must be `Send + Sync`.
pub trait Reporter: Debug + Send + Sync {
    /// Delivers the statistics accumulated by the timer identified by `label`.
    fn report<S: Stats>(&self, label: &str, stats: &S);
}

/// Reporter that discards every report.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct NullReporter;

impl Reporter for NullReporter {
    #[inline]
    fn report<S: Stats>(&self, _label: &str, _stats: &S) {}
}

/// Reporter that writes the report line to the standard error stream of the process.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    // Writing to a real stderr is not observable from tests.
    #[cfg_attr(test, mutants::skip)]
    fn report<S: Stats>(&self, label: &str, stats: &S) {
        write_report_line(&mut io::stderr().lock(), label, stats);
    }
}

/// Writes one report line, logging (and otherwise ignoring) any I/O failure.
pub(crate) fn write_report_line<W, S>(writer: &mut W, label: &str, stats: &S)
where
    W: Write + ?Sized,
    S: Stats,
{
    let result = writeln!(writer, "{label}: {stats}").and_then(|()| writer.flush());

    if let Err(error) = result {
        tracing::warn!(timer = label, %error, "failed to write timer report");
    }
}
