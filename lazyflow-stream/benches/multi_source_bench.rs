// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use lazyflow_core::Pipeline;
use lazyflow_exec::{CollectExt, CountExt};
use lazyflow_stream::{CombineExt, MergeExt, TakeExt};
use std::hint::black_box;

fn make_pipeline(size: usize) -> Pipeline<usize> {
    Pipeline::from_vec((0..size).collect())
}

pub fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let sizes = [100usize, 1000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        let left = make_pipeline(size);
        let right = make_pipeline(size);

        group.bench_with_input(
            BenchmarkId::new("pairs", size),
            &(left.clone(), right.clone()),
            |bencher, (left, right)| {
                bencher.iter(|| black_box(left.clone().combine(right.clone()).count()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("combine_with", size),
            &(left, right),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    black_box(
                        left.clone()
                            .combine_with(right.clone(), |a, b| a + b)
                            .count(),
                    )
                });
            },
        );
    }

    group.finish();
}

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let fan_in = [2usize, 4, 8];

    for &sources in &fan_in {
        let id = BenchmarkId::from_parameter(format!("s{sources}_m100"));
        group.throughput(Throughput::Elements((sources * 100) as u64));

        group.bench_with_input(id, &sources, |bencher, &sources| {
            let head = make_pipeline(1000).take(100);
            let rest: Vec<_> = (1..sources)
                .map(|_| make_pipeline(1000).take(100))
                .collect();
            bencher.iter(|| black_box(head.clone().merge(rest.clone()).collect()));
        });
    }

    group.finish();
}
