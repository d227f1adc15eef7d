//! Basic benchmarks for the `dynamic_array` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use dynamic_array::DynamicArray;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("da_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(DynamicArray::<TestItem>::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_back_first");
    group.bench_function("push_back_first", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(DynamicArray::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                array.push_back(black_box(TEST_VALUE)).unwrap();
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_back_1000");
    group.bench_function("push_back_1000", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut array = DynamicArray::<TestItem>::new();

                for _ in 0..1000 {
                    array.push_back(black_box(TEST_VALUE)).unwrap();
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("pop_back_1000");
    group.bench_function("pop_back_1000", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| DynamicArray::<TestItem>::with_size(1000))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                while !array.is_empty() {
                    _ = black_box(array.pop_back());
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front_100");
    group.bench_function("insert_front_100", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut array = DynamicArray::<TestItem>::new();

                for _ in 0..100 {
                    array.insert(0, black_box(TEST_VALUE)).unwrap();
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("read_one");
    group.bench_function("read_one", |b| {
        b.iter_custom(|iters| {
            let array = DynamicArray::<TestItem>::with_size(100);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(array.get(black_box(50)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("resize_oscillate");
    group.bench_function("resize_oscillate", |b| {
        b.iter_custom(|iters| {
            let mut array = DynamicArray::<TestItem>::with_size(100);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            // Oscillating within the shrink threshold never reallocates.
            for _ in 0..iters {
                array.resize(black_box(90)).unwrap();
                array.resize(black_box(100)).unwrap();
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
