//! Criterion benchmarks for slogger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use slogger::prelude::*;
use slogger::{debug, error, info, Ring};
use std::io;

// ============================================================================
// Ring Benchmarks
// ============================================================================

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_remove", |b| {
        let ring: Ring<u64, 128> = Ring::new();
        b.iter(|| {
            ring.add(black_box(42));
            black_box(ring.remove())
        });
    });

    group.bench_function("add_overwrite", |b| {
        let ring: Ring<u64, 128> = Ring::new();
        for i in 0..128 {
            ring.add(i);
        }
        b.iter(|| black_box(ring.add(black_box(7))));
    });

    group.finish();
}

// ============================================================================
// Logging Benchmarks
// ============================================================================

fn bench_threaded_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("threaded_logger");
    group.throughput(Throughput::Elements(1));

    group.bench_function("error_formatted", |b| {
        let logger: ThreadedLogger = ThreadedLogger::new(false, false);
        b.iter(|| {
            error!(logger, "late packet {} on stream {}", black_box(17), black_box(3));
            black_box(logger.remove())
        });
    });

    group.bench_function("info_overwriting", |b| {
        let logger: ThreadedLogger = ThreadedLogger::new(false, true);
        b.iter(|| info!(logger, "frame {}", black_box(1)));
    });

    group.bench_function("debug_disabled", |b| {
        let logger: ThreadedLogger = ThreadedLogger::new(false, true);
        b.iter(|| debug!(logger, "never formatted {}", black_box(1)));
    });

    group.finish();
}

fn bench_direct_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_logger");
    group.throughput(Throughput::Elements(100));

    group.bench_function("poll_100_records", |b| {
        let rt_logger: std::sync::Arc<ThreadedLogger> =
            std::sync::Arc::new(ThreadedLogger::new(false, true));
        let main_logger = DirectLogger::with_writer(false, true, io::sink());
        main_logger.add(rt_logger.clone());

        b.iter(|| {
            for i in 0..100 {
                info!(rt_logger, "record {}", i);
            }
            main_logger.poll();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ring, bench_threaded_logging, bench_direct_poll);
criterion_main!(benches);
