//! Example of one timer shared by many worker threads, with reports collected through
//! `tracing`.
//!
//! Run with: `cargo run --example stopwatch_stats_threaded`.

use std::hint::black_box;
use std::thread;

use stopwatch_stats::{ConcurrentManager, HiResClock, Timer, TracingReporter, VarBoundStats};

type WorkerTimer = Timer<ConcurrentManager<HiResClock, VarBoundStats>, TracingReporter>;

fn main() {
    tracing_subscriber::fmt().init();

    let timer = WorkerTimer::new("checksum");

    thread::scope(|s| {
        for worker in 0..8_u64 {
            let timer = &timer;

            s.spawn(move || {
                for block in 0..1_000_u64 {
                    let _scope = timer.scoped_start();

                    let checksum = (0..256_u64)
                        .fold(worker ^ block, |acc, byte| acc.rotate_left(5) ^ byte);
                    black_box(checksum);
                }
            });
        }
    });

    tracing::info!(samples = timer.stats().count(), "all workers finished");

    // Dropping the timer emits its report as a tracing event.
}
