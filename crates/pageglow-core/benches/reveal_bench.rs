//! Benchmarks for Pageglow enhancement operations
//!
//! Run with: cargo bench -p pageglow-core
//!
//! These benchmarks establish performance baselines for:
//! - Page construction and selector queries
//! - Activation scheduling
//! - Draining a full reveal timeline on the manual clock
//! - Selector parsing and stamp formatting

use std::time::Duration;

use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pageglow_core::status::format_ru_timestamp;
use pageglow_core::{ManualClock, MemoryPage, PageDom, PageEnhancer, Selector};

/// A page with `cards` navigation cards and one placeholder status element
fn landing_page(cards: usize) -> MemoryPage {
    let page = MemoryPage::new();
    for i in 0..cards {
        page.append("div")
            .with_class("nav-card")
            .with_text(format!("card {}", i));
    }
    page.append("span").with_class("status-value").with_text("-");
    page
}

// ============================================================================
// Page and Selector Benchmarks
// ============================================================================

fn bench_page_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_construction");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(landing_page(size)))
        });
    }

    group.finish();
}

fn bench_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_all");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let page = landing_page(size);
            let selector = Selector::class("nav-card");

            b.iter(|| black_box(page.select_all(&selector)))
        });
    }

    group.finish();
}

fn bench_selector_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_parse");

    for input in [".nav-card", "#status", "section"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(Selector::parse(input).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Activation Benchmarks
// ============================================================================

fn bench_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("cards", size), size, |b, &size| {
            b.iter_batched(
                || (landing_page(size), ManualClock::new()),
                |(page, clock)| black_box(PageEnhancer::new().activate(&page, &clock)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_timeline_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_drain");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("cards", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let page = landing_page(size);
                    let clock = ManualClock::new();
                    PageEnhancer::new().activate(&page, &clock);
                    (page, clock)
                },
                |(page, clock)| {
                    // Far enough for the last card and the first minute tick
                    clock.advance(Duration::from_millis(100 * size as u64));
                    black_box(page)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_format_timestamp(c: &mut Criterion) {
    let at = Local
        .with_ymd_and_hms(2024, 5, 9, 14, 30, 0)
        .single()
        .expect("Fixture datetime should be unambiguous");

    c.bench_function("format_ru_timestamp", |b| {
        b.iter(|| black_box(format_ru_timestamp(at)))
    });
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(
    page_benches,
    bench_page_construction,
    bench_select_all,
    bench_selector_parse,
);

criterion_group!(enhancer_benches, bench_activation, bench_timeline_drain,);

criterion_group!(format_benches, bench_format_timestamp,);

criterion_main!(page_benches, enhancer_benches, format_benches,);
