// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use ripple_core::Subject;
use ripple_stream::{never, of, switch_map};
use std::hint::black_box;

/// Benchmarks switching between synchronous inner streams.
pub fn bench_switch_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch_map");
    let sizes = [100usize, 1000usize];

    for &size in &sizes {
        let id = BenchmarkId::from_parameter(format!("sync_m{size}"));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(id, &size, |bencher, &size| {
            let switched = of(0..size).pipe(switch_map(|n: usize| of([n, n + 1])));
            bencher.iter(|| {
                switched.subscribe(|n: usize| {
                    black_box(n);
                });
            });
        });

        let id = BenchmarkId::from_parameter(format!("superseded_m{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            bencher.iter(|| {
                let outer = Subject::<usize>::new();
                let subscription = outer
                    .as_stream()
                    .pipe(switch_map(|_: usize| never::<usize>()))
                    .subscribe(|n: usize| {
                        black_box(n);
                    });
                for n in 0..size {
                    let _ = outer.next(n);
                }
                subscription.unsubscribe();
            });
        });
    }

    group.finish();
}
