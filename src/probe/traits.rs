//! Traits at the I/O boundaries of a probe run.

use crate::error::Result;
use crate::probe::data::Sample;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for timing a single request against a target.
///
/// Implementations measure wall-clock time for one round trip and report
/// transport failures as errors. They never retry.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Issue one request to `url` and return how long it took.
    async fn probe(&self, url: &str) -> Result<Duration>;
}

/// Destination for recorded samples.
///
/// Each call to [`SampleSink::record`] is an independent write; a failure
/// affects only that sample.
#[async_trait]
pub trait SampleSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Record one sample. `index` is the 1-based request number.
    async fn record(&self, index: usize, sample: &Sample) -> Result<()>;

    /// Release any resources held by the sink.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
