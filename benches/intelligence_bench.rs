// ABOUTME: Criterion benchmarks for nutrition target and progress analytics algorithms
// ABOUTME: Measures target calculation, batch evaluation, log statistics, and weight trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for intelligence module algorithms.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    bench_today, generate_log_history, generate_profiles, generate_weight_history, window_start,
    HistoryLength,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_engine::config::intelligence::NutritionConfig;
use nutrition_engine::intelligence::{
    compute_progress_statistics, compute_targets_batch, compute_targets_with_config,
    compute_weight_change_with_config,
};

fn bench_target_calculation(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profiles = generate_profiles(1);

    c.bench_function("compute_targets_single", |b| {
        b.iter(|| compute_targets_with_config(black_box(&profiles[0]), bench_today(), &config));
    });
}

fn bench_target_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_targets_batch");
    let config = NutritionConfig::default();

    for count in [10_u32, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("profiles", count), &profiles, |b, profiles| {
            b.iter(|| compute_targets_batch(black_box(profiles), bench_today(), &config));
        });
    }

    group.finish();
}

fn bench_progress_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_statistics");

    for length in [
        HistoryLength::Week,
        HistoryLength::Quarter,
        HistoryLength::TwoYears,
    ] {
        let logs = generate_log_history(length);
        let start = window_start(length);
        group.throughput(Throughput::Elements(length.days()));
        group.bench_with_input(
            BenchmarkId::new("window_days", length.days()),
            &logs,
            |b, logs| {
                b.iter(|| compute_progress_statistics(black_box(logs), start, bench_today()));
            },
        );
    }

    group.finish();
}

fn bench_weight_change(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let weights = generate_weight_history(HistoryLength::TwoYears);

    c.bench_function("compute_weight_change_30d", |b| {
        b.iter(|| {
            compute_weight_change_with_config(black_box(&weights), 30, bench_today(), &config.progress)
        });
    });
}

criterion_group!(
    benches,
    bench_target_calculation,
    bench_target_batch,
    bench_progress_statistics,
    bench_weight_change,
);
criterion_main!(benches);
