//! Benchmark comparing LineRangeList against Vec-based alternatives.
//!
//! The packed list exists to avoid one heap allocation per stored range;
//! `Vec<Box<LineRange>>` below stands in for a per-element-allocated
//! collection, `Vec<LineRange>` for the unpacked-but-inline baseline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use line_ranges::{LineRange, LineRangeList};
use std::hint::black_box;

const SMALL_SIZE: usize = 10_000;
const LARGE_SIZE: usize = 1_000_000;

fn nth_range(i: usize) -> LineRange {
    let start = (i * 2) as u32;
    LineRange::new(start, start + 1)
}

fn fill_packed(count: usize) -> LineRangeList {
    let mut list = LineRangeList::new();
    for i in 0..count {
        list.push(nth_range(i));
    }
    list.trim();
    list
}

fn fill_boxed(count: usize) -> Vec<Box<LineRange>> {
    (0..count).map(|i| Box::new(nth_range(i))).collect()
}

fn fill_inline(count: usize) -> Vec<LineRange> {
    (0..count).map(nth_range).collect()
}

/// Benchmark: populate a collection from scratch, including growth.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in [SMALL_SIZE, LARGE_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("LineRangeList", size), &size, |b, &n| {
            b.iter(|| black_box(fill_packed(n)))
        });

        group.bench_with_input(
            BenchmarkId::new("Vec<Box<LineRange>>", size),
            &size,
            |b, &n| b.iter(|| black_box(fill_boxed(n))),
        );

        group.bench_with_input(BenchmarkId::new("Vec<LineRange>", size), &size, |b, &n| {
            b.iter(|| black_box(fill_inline(n)))
        });
    }

    group.finish();
}

/// Benchmark: sequential scan summing start lines.
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_sum_starts");

    for size in [SMALL_SIZE, LARGE_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        let packed = fill_packed(size);
        group.bench_with_input(
            BenchmarkId::new("LineRangeList", size),
            &packed,
            |b, list| {
                b.iter(|| {
                    let mut sum: u64 = 0;
                    for range in list {
                        sum = sum.wrapping_add(u64::from(range.start()));
                    }
                    black_box(sum)
                })
            },
        );
        drop(packed);

        let boxed = fill_boxed(size);
        group.bench_with_input(
            BenchmarkId::new("Vec<Box<LineRange>>", size),
            &boxed,
            |b, data| {
                b.iter(|| {
                    let mut sum: u64 = 0;
                    for range in data.iter() {
                        sum = sum.wrapping_add(u64::from(range.start()));
                    }
                    black_box(sum)
                })
            },
        );
        drop(boxed);
    }

    group.finish();
}

/// Benchmark: linear containment scan for the last element.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_last");

    let size = SMALL_SIZE;
    group.throughput(Throughput::Elements(size as u64));

    let packed = fill_packed(size);
    let needle = nth_range(size - 1);

    group.bench_with_input(
        BenchmarkId::new("LineRangeList", size),
        &packed,
        |b, list| b.iter(|| black_box(list.contains(black_box(needle)))),
    );

    let inline = fill_inline(size);
    group.bench_with_input(
        BenchmarkId::new("Vec<LineRange>", size),
        &inline,
        |b, data| b.iter(|| black_box(data.contains(black_box(&needle)))),
    );

    group.finish();
}

/// Print per-element memory cost comparison.
fn print_memory_comparison() {
    use std::mem::size_of;

    println!("\n=== Per-Element Memory Cost ===\n");
    println!(
        "LineRangeList (packed word)   | {:>3} bytes",
        size_of::<u64>()
    );
    println!(
        "Vec<LineRange>                | {:>3} bytes",
        size_of::<LineRange>()
    );
    println!(
        "Vec<Box<LineRange>>           | {:>3} bytes + one heap allocation",
        size_of::<Box<LineRange>>()
    );
    println!();
}

fn bench_print_memory_info(c: &mut Criterion) {
    print_memory_comparison();
    c.bench_function("memory_info_printed", |b| b.iter(|| black_box(1)));
}

criterion_group!(
    benches,
    bench_print_memory_info,
    bench_fill,
    bench_scan,
    bench_contains,
);

criterion_main!(benches);
