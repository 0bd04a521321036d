//! Benchmarks for the loyalty accrual engine
//!
//! Measures:
//! - Discount queries across the count range
//! - Bulk recording of qualifying actions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use greencabal_loyalty::{discount_info, record_qualifying_action, DiscountPolicy, LoyaltyState};

/// Benchmark discount queries below, at and beyond the cap
fn bench_discount_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("discount_info");

    for &count in &[0u64, 19, 25, 999, 1000, 1_000_000] {
        let state = LoyaltyState::new(count);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, s| {
            b.iter(|| discount_info(black_box(Some(s))))
        });
    }
    group.finish();
}

/// Benchmark recording actions one at a time
fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_qualifying_action");

    for &actions in &[20u64, 1000, 10_000] {
        group.throughput(Throughput::Elements(actions));
        group.bench_with_input(BenchmarkId::from_parameter(actions), &actions, |b, &n| {
            b.iter(|| {
                let mut state = LoyaltyState::ZERO;
                for _ in 0..n {
                    state = record_qualifying_action(black_box(state));
                }
                state
            })
        });
    }
    group.finish();
}

/// Benchmark a custom policy against the standard one
fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_info");
    let policies = [
        ("standard", DiscountPolicy::STANDARD),
        ("custom", DiscountPolicy::new(7, 30).expect("valid policy")),
    ];

    for (name, policy) in policies {
        group.bench_function(name, |b| b.iter(|| policy.info(black_box(777))));
    }
    group.finish();
}

criterion_group!(benches, bench_discount_info, bench_record, bench_policy);
criterion_main!(benches);
