use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use latency_probe::{
    ProbeConfig, ProbeRunner, Prober, Result, Sample, SampleSink, Summary,
};
use std::time::Duration;

/// Prober that answers instantly so only loop overhead is measured
struct InstantProber;

#[async_trait]
impl Prober for InstantProber {
    async fn probe(&self, _url: &str) -> Result<Duration> {
        Ok(Duration::from_micros(1500))
    }
}

/// Sink that discards samples
struct NullSink;

#[async_trait]
impl SampleSink for NullSink {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn record(&self, _index: usize, _sample: &Sample) -> Result<()> {
        Ok(())
    }
}

fn durations(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 7919) % 1000) as f64 / 10.0).collect()
}

/// Benchmark summary statistics over growing inputs
fn bench_summary(c: &mut Criterion) {
    for len in [10usize, 100, 1_000, 10_000].iter() {
        let values = durations(*len);
        c.bench_with_input(BenchmarkId::new("summary", len), &values, |b, values| {
            b.iter(|| Summary::from_durations(values).expect("Should summarize"))
        });
    }
}

/// Benchmark JSON serialization of a sample document
fn bench_sample_serialization(c: &mut Criterion) {
    let sample = Sample::new("203.0.113.7", Duration::from_micros(48_213), "rust");

    c.bench_function("sample_json_serialization", |b| {
        b.iter(|| serde_json::to_string(&sample).expect("Should serialize"))
    });
}

/// Benchmark the probe loop itself with no network
fn bench_probe_loop(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");
    let runner = ProbeRunner::new(InstantProber, ProbeConfig::default().with_repeats(10));

    c.bench_function("probe_loop_10", |b| {
        b.to_async(&rt)
            .iter(|| async { runner.run("203.0.113.7", &NullSink).await })
    });
}

criterion_group!(
    benches,
    bench_summary,
    bench_sample_serialization,
    bench_probe_loop
);
criterion_main!(benches);
