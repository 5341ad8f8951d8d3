//! Basic example of timing a few code regions with `stopwatch_stats`.
//!
//! Each timer writes one line of statistics to stderr when it goes out of scope.
//!
//! Run with: `cargo run --example stopwatch_stats_basic`.

use std::fmt::Write;
use std::hint::black_box;

use stopwatch_stats::{BasicTimer, DefaultTimer, NullTimer};

fn main() {
    let formatting = DefaultTimer::new("string_formatting");
    let sorting = DefaultTimer::new("sorting");
    let coarse = BasicTimer::new("whole_run");
    let disabled = NullTimer::new("disabled");

    coarse.start();

    for i in 0..50_u32 {
        {
            let _scope = formatting.scoped_start();

            let mut text = String::new();
            for j in 0..200_u32 {
                write!(text, "{i}-{j};").expect("writing to a String cannot fail");
            }
            black_box(text);
        }

        sorting.start();
        let mut values = (0..2_000_u32)
            .map(|v| v.wrapping_mul(2_654_435_761).rotate_left(i))
            .collect::<Vec<_>>();
        values.sort_unstable();
        black_box(values);
        sorting.stop();

        disabled.start();
        disabled.stop();
    }

    coarse.stop();

    println!(
        "formatting: {} samples, sorting: {} samples",
        formatting.stats().count(),
        sorting.stats().count()
    );

    // Dropping the timers writes their reports to stderr.
}

