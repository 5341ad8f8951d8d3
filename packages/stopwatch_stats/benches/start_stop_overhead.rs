//! Benchmarks to measure the compute overhead of `stopwatch_stats` logic itself.
//!
//! These benchmarks time empty measurements - a start immediately followed by a stop - so
//! that only the cost of the clock, the correlation manager and the statistics update is seen.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use stopwatch_stats::{
    BoundStats, Clock, CoarseClock, ConcurrentManager, HiResClock, MeanBoundStats, NullReporter,
    NullTimer, SerialManager, Timer, VarBoundStats,
};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("stopwatch_stats_overhead");

    // Baseline measurement - no timing at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    group.bench_function("clock_hi_res_now", |b| {
        b.iter(|| black_box(HiResClock.now()));
    });

    group.bench_function("clock_coarse_now", |b| {
        b.iter(|| black_box(CoarseClock.now()));
    });

    #[cfg(unix)]
    group.bench_function("clock_monotonic_now", |b| {
        b.iter(|| black_box(stopwatch_stats::MonotonicClock.now()));
    });

    {
        let timer = NullTimer::new("null");
        group.bench_function("null_start_stop", |b| {
            b.iter(|| {
                timer.start();
                timer.stop();
            });
        });
    }

    {
        let timer = Timer::<SerialManager<HiResClock, BoundStats>, NullReporter>::new("bound");
        group.bench_function("serial_bound_start_stop", |b| {
            b.iter(|| {
                timer.start();
                timer.stop();
            });
        });
    }

    {
        let timer =
            Timer::<SerialManager<HiResClock, MeanBoundStats>, NullReporter>::new("mean");
        group.bench_function("serial_mean_start_stop", |b| {
            b.iter(|| {
                timer.start();
                timer.stop();
            });
        });
    }

    {
        let timer = Timer::<SerialManager<HiResClock, VarBoundStats>, NullReporter>::new("var");
        group.bench_function("serial_var_start_stop", |b| {
            b.iter(|| {
                timer.start();
                timer.stop();
            });
        });

        group.bench_function("serial_var_scoped", |b| {
            b.iter(|| {
                let _scope = timer.scoped_start();
            });
        });
    }

    {
        let timer =
            Timer::<ConcurrentManager<HiResClock, VarBoundStats>, NullReporter>::new("shared");
        group.bench_function("concurrent_var_start_stop", |b| {
            b.iter(|| {
                timer.start();
                timer.stop();
            });
        });
    }

    group.finish();
}
