//! Performance benchmarks for the Deduction Estimator.
//!
//! Covers the bare estimate, the traced estimate, and the full HTTP path:
//! - Single estimate: < 20μs mean
//! - Single POST /estimate: < 200μs mean
//! - Batch of 1000 estimates across every region: < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use deduction_estimator::api::{AppState, EstimateRequest, create_router};
use deduction_estimator::calculation::Estimator;
use deduction_estimator::config::ConfigLoader;
use deduction_estimator::models::EstimateInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/jp2024").expect("Failed to load config")
}

/// Builds `count` inputs cycling through every region and a spread of ages.
fn create_inputs(config: &ConfigLoader, count: usize) -> Vec<EstimateInput> {
    config
        .regions()
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, region)| {
            let net_salary = Decimal::from(150_000 + (i as i64 % 50) * 5_000);
            let age = 20 + (i as i32 % 50);
            EstimateInput::new(net_salary, age, region.code.clone())
        })
        .collect()
}

/// Benchmark: one estimate without the audit trace being read.
fn bench_single_estimate(c: &mut Criterion) {
    let estimator = Estimator::new(load_config().schedule().clone());
    let input = EstimateInput::new(Decimal::from(300_000), 45, "tokyo");

    c.bench_function("single_estimate", |b| {
        b.iter(|| black_box(estimator.estimate(black_box(&input))))
    });
}

/// Benchmark: one estimate including the audit trace.
fn bench_traced_estimate(c: &mut Criterion) {
    let estimator = Estimator::new(load_config().schedule().clone());
    let input = EstimateInput::new(Decimal::from(300_000), 45, "tokyo");

    c.bench_function("traced_estimate", |b| {
        b.iter(|| black_box(estimator.estimate_traced(black_box(&input))))
    });
}

/// Benchmark: POST /estimate through the router.
fn bench_http_estimate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let request = EstimateRequest {
        net_salary: Some(Decimal::from(300_000)),
        age: Some(45),
        region_code: Some("tokyo".to_string()),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("http_estimate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/estimate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batches of estimates to understand scaling behavior.
fn bench_batches(c: &mut Criterion) {
    let config = load_config();
    let estimator = Estimator::new(config.schedule().clone());

    let mut group = c.benchmark_group("batch_estimates");

    for count in [10usize, 100, 1000] {
        let inputs = create_inputs(&config, count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("estimates", count), &inputs, |b, inputs| {
            b.iter(|| {
                let results: Vec<_> = inputs.iter().map(|input| estimator.estimate(input)).collect();
                black_box(results)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_estimate,
    bench_traced_estimate,
    bench_http_estimate,
    bench_batches,
);
criterion_main!(benches);
