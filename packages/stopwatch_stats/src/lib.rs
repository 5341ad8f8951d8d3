#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Stopwatch timers that accumulate statistics about repeated measurements of code regions
//! and report a one-line summary when the timer is dropped.
//!
//! A [`Timer`] is composed at compile time from independent policies:
//!
//! - a [`CorrelationManager`] that pairs each `start()` with its `stop()` - either
//!   [`SerialManager`] (single thread, no locking), [`ConcurrentManager`] (many threads
//!   sharing one timer) or [`NullManager`] (timing compiled away entirely);
//! - a [`Clock`] that supplies instants - [`HiResClock`], [`CoarseClock`],
//!   `MonotonicClock` (Unix), [`ManualClock`] or [`NullClock`];
//! - a [`Stats`] accumulator that digests interval samples - [`BoundStats`],
//!   [`MeanBoundStats`], [`VarBoundStats`] or [`NullStats`];
//! - a [`Reporter`] that receives the final statistics when the timer is dropped.
//!
//! All intervals are expressed as `f64` seconds.
//!
//! # Simple usage
//!
//! ```
//! use stopwatch_stats::{HiResClock, NullReporter, SerialManager, Timer, VarBoundStats};
//!
//! type QuietTimer = Timer<SerialManager<HiResClock, VarBoundStats>, NullReporter>;
//!
//! let timer = QuietTimer::new("parse_config");
//!
//! for _ in 0..10 {
//!     timer.start();
//!     std::hint::black_box((0..1000).sum::<u64>());
//!     timer.stop();
//! }
//!
//! assert_eq!(timer.stats().count(), 10);
//! ```
//!
//! # Scoped measurement
//!
//! [`Timer::scoped_start()`] returns a guard that stops the timer when it goes out of scope,
//! no matter how the scope is exited:
//!
//! ```
//! use stopwatch_stats::{DefaultTimer, Timer};
//!
//! fn checked_work(timer: &DefaultTimer, input: &str) -> Result<u32, std::num::ParseIntError> {
//!     let _scope = timer.scoped_start();
//!     let value: u32 = input.parse()?;
//!     Ok(value * 2)
//! }
//!
//! let timer = DefaultTimer::new("checked_work");
//! checked_work(&timer, "21").unwrap();
//! checked_work(&timer, "not a number").unwrap_err();
//!
//! assert_eq!(timer.stats().count(), 2);
//! // When `timer` is dropped, a line like this is written to stderr:
//! // checked_work: 1.250 µs, std = 0.250 µs, 1.000 µs <= t <= 1.500 µs (n=2)
//! ```
//!
//! # Threading
//!
//! Timers using [`SerialManager`] are not `Sync` and can only be used from one thread.
//! Timers using [`ConcurrentManager`] may be shared between any number of threads, with each
//! thread's `start()` paired with the same thread's `stop()`:
//!
//! ```
//! use std::thread;
//!
//! use stopwatch_stats::{ConcurrentManager, HiResClock, MeanBoundStats, NullReporter, Timer};
//!
//! let timer = Timer::<ConcurrentManager<HiResClock, MeanBoundStats>, NullReporter>::new("shared");
//!
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             for _ in 0..100 {
//!                 let _scope = timer.scoped_start();
//!             }
//!         });
//!     }
//! });
//!
//! assert_eq!(timer.stats().count(), 400);
//! ```
//!
//! # Per-callsite timers
//!
//! [`static_scoped!`] measures the rest of the enclosing block with a [`ThreadedTimer`] that
//! is created on first use and shared by every later pass through the same callsite. Timers
//! in statics are never dropped, so their reports are written by [`report_static_timers()`]:
//!
//! ```
//! use stopwatch_stats::{report_static_timers, static_scoped};
//!
//! fn handle_request(body: &str) -> usize {
//!     static_scoped!("handle_request");
//!     body.split_whitespace().count()
//! }
//!
//! handle_request("a b c");
//! handle_request("d e");
//!
//! // Writes "handle_request: ... (n=2)" to stderr.
//! report_static_timers();
//! ```
//!
//! # Disabling timing
//!
//! Switching a timer type alias to [`NullTimer`] removes all measurement logic without
//! changes to the code that uses the timer. Every operation of a null timer is an empty
//! inline function.
//!
//! # Panic policy
//!
//! Calling `stop()` without a preceding `start()` is a caller error. Debug builds panic;
//! release builds silently record nothing for such a call. A clock that fails to read
//! the operating system time causes a panic.

mod clock;
mod clocks;
mod concurrent_manager;
mod constants;
mod error;
mod manager;
mod null_manager;
mod reporter;
mod scoped;
mod serial_manager;
mod static_timer;
mod stats;
mod stats_bound;
mod stats_mean_bound;
mod stats_null;
mod stats_var_bound;
mod stream_reporter;
mod time_unit;
mod timer;
mod timer_builder;
mod tracing_reporter;

pub use clock::*;
pub use clocks::*;
pub use concurrent_manager::*;
pub(crate) use constants::*;
pub use error::*;
pub use manager::*;
pub use null_manager::*;
pub use reporter::*;
pub use scoped::*;
pub use serial_manager::*;
pub use static_timer::*;
pub use stats::*;
pub use stats_bound::*;
pub use stats_mean_bound::*;
pub use stats_null::*;
pub use stats_var_bound::*;
pub use stream_reporter::*;
pub use time_unit::*;
pub use timer::*;
pub use timer_builder::*;
pub use tracing_reporter::*;
