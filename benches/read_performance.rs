//! Performance benchmarks for envtap.
//!
//! The interception point sits on hot paths of instrumented code, so the
//! overhead of a read with the no-op observer installed should stay within
//! a few nanoseconds of the unwrapped lookup, and slot operations should
//! not degrade under concurrent readers.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use envtap::prelude::*;
use std::sync::Arc;
use std::thread;

fn bench_source() -> MapSource {
    MapSource::from_iter([("bench.key", "bench-value")])
}

/// Benchmark a read with the default no-op observer installed
fn benchmark_read_noop(c: &mut Criterion) {
    let tap = TappedEnv::new(bench_source());

    let mut group = c.benchmark_group("read");
    group.bench_function("noop_observer", |b| {
        b.iter(|| {
            let value = tap.read(black_box("bench.key"), "bench").unwrap();
            black_box(value);
        });
    });
    group.finish();
}

/// Benchmark a read with a recording observer installed
fn benchmark_read_recording(c: &mut Criterion) {
    let tap = TappedEnv::new(bench_source());
    let spy = Arc::new(RecordingObserver::new());
    tap.install(spy.clone());

    let mut group = c.benchmark_group("read");
    group.bench_function("recording_observer", |b| {
        b.iter(|| {
            let value = tap.read(black_box("bench.key"), "bench").unwrap();
            black_box(value);
        });
        spy.clear();
    });
    group.finish();
}

/// Benchmark the raw slot operations
fn benchmark_slot(c: &mut Criterion) {
    let slot = ObserverSlot::new();
    let observer: Arc<dyn QueryObserver> = Arc::new(NoOpObserver);

    let mut group = c.benchmark_group("slot");
    group.bench_function("current", |b| {
        b.iter(|| {
            black_box(slot.current());
        });
    });
    group.bench_function("install", |b| {
        b.iter(|| {
            slot.install(Arc::clone(&observer));
        });
    });
    group.bench_function("reset", |b| {
        b.iter(|| {
            slot.reset();
        });
    });
    group.finish();
}

/// Benchmark slot reads while another thread continuously swaps observers
fn benchmark_current_under_swaps(c: &mut Criterion) {
    let slot = ObserverSlot::new();
    let writer_slot = slot.clone();
    let stop = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let writer_stop = Arc::clone(&stop);

    let writer = thread::spawn(move || {
        while !writer_stop.load(std::sync::atomic::Ordering::Relaxed) {
            writer_slot.install(Arc::new(NoOpObserver));
            writer_slot.reset();
        }
    });

    let mut group = c.benchmark_group("slot");
    group.bench_function("current_under_swaps", |b| {
        b.iter(|| {
            black_box(slot.current());
        });
    });
    group.finish();

    stop.store(true, std::sync::atomic::Ordering::Relaxed);
    writer.join().unwrap();
}

criterion_group!(
    benches,
    benchmark_read_noop,
    benchmark_read_recording,
    benchmark_slot,
    benchmark_current_under_swaps
);
criterion_main!(benches);
