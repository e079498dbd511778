//! Criterion benchmarks for hierlog

use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hierlog::prelude::*;
use hierlog::Record;
use std::sync::Arc;

const DATE: &str = "%Y/%m/%d %H:%M:%S";

fn quiet(mode: WriteMode, format: OutputFormat) -> Logger {
    Logger::builder()
        .name("bench")
        .level(LogLevel::Debug)
        .mode(mode)
        .writer(std::io::sink(), format)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("root_blocking", |b| {
        b.iter(|| black_box(quiet(WriteMode::Blocking, OutputFormat::Text)));
    });

    group.bench_function("root_non_blocking", |b| {
        b.iter(|| black_box(quiet(WriteMode::NonBlocking, OutputFormat::Text)));
    });

    let root = quiet(WriteMode::Blocking, OutputFormat::Text);
    group.bench_function("child", |b| {
        b.iter(|| black_box(root.local().name("child").build()));
    });

    group.finish();
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_blocking_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocking_logging");
    group.throughput(Throughput::Elements(1));

    for format in [OutputFormat::Text, OutputFormat::TextColor, OutputFormat::Json] {
        let logger = quiet(WriteMode::Blocking, format);
        group.bench_function(format.name(), |b| {
            b.iter(|| logger.info(black_box("Info message")));
        });
    }

    let logger = quiet(WriteMode::Blocking, OutputFormat::Text);
    group.bench_function("filtered", |b| {
        let mut logger = logger.local().build();
        logger.set_min_level(LogLevel::Error);
        b.iter(|| logger.debug(black_box("never written")));
    });

    group.finish();
}

fn bench_non_blocking_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_blocking_logging");
    group.throughput(Throughput::Elements(1));

    let logger = quiet(WriteMode::NonBlocking, OutputFormat::Text);
    group.bench_function("info_drop_policy", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    let logger = quiet(WriteMode::NonBlocking, OutputFormat::Json);
    group.bench_function("entry_with_props", |b| {
        b.iter(|| {
            logger
                .entry(LogLevel::Info)
                .prop("user", "alice")
                .prop("attempt", black_box(3))
                .msg("login")
        });
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    let threads = 4;
    let per_thread = 250;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    for mode in [WriteMode::Blocking, WriteMode::NonBlocking] {
        let logger = Arc::new(quiet(mode, OutputFormat::Text));
        group.bench_function(format!("{:?}", mode), |b| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..per_thread {
                                logger.infof(format_args!("thread {} message {}", t, i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let props: Properties = [("user", "alice"), ("region", "eu-west")].into_iter().collect();
    let record = Record::new(LogLevel::Warning, "request failed", "verylongname")
        .with_props(props)
        .with_timestamp(at);

    for format in [OutputFormat::Text, OutputFormat::TextColor, OutputFormat::Json] {
        group.bench_function(format.name(), |b| {
            b.iter(|| black_box(format.render(black_box(&record), DATE)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_blocking_logging,
    bench_non_blocking_logging,
    bench_concurrent_logging,
    bench_render,
);

criterion_main!(benches);
