//! The sequential probe loop.

use crate::error::{ProbeError, Result};
use crate::probe::{
    data::Sample,
    stats::Summary,
    traits::{Prober, SampleSink},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Configuration for one probe run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Number of requests to issue
    pub repeats: usize,
    /// URL every probe is sent to
    pub target_url: String,
    /// IP-echo service used to discover the public address
    pub ip_echo_url: String,
    /// Implementation tag stored with each sample
    pub lang: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            repeats: crate::DEFAULT_REPEATS,
            target_url: crate::DEFAULT_TARGET_URL.to_string(),
            ip_echo_url: crate::DEFAULT_IP_ECHO_URL.to_string(),
            lang: crate::DEFAULT_LANG.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Set the number of requests.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Set the probe target.
    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }

    /// Set the IP-echo service.
    pub fn with_ip_echo_url(mut self, url: impl Into<String>) -> Self {
        self.ip_echo_url = url.into();
        self
    }

    /// Set the implementation tag.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Reject configurations that cannot produce a run.
    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 {
            return Err(ProbeError::config_error("repeats must be at least 1"));
        }
        if self.target_url.trim().is_empty() {
            return Err(ProbeError::config_error("target URL is empty"));
        }
        if self.ip_echo_url.trim().is_empty() {
            return Err(ProbeError::config_error("IP-echo URL is empty"));
        }
        Ok(())
    }
}

/// Outcome of a probe run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Requests attempted
    pub requested: usize,
    /// Successful measurements in request order
    pub samples: Vec<Sample>,
    /// Requests that failed before a response arrived
    pub failed_probes: usize,
    /// Samples the sink failed to record
    pub failed_writes: usize,
}

impl RunReport {
    /// Durations of every successful measurement, including ones the sink rejected.
    pub fn durations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.duration_ms).collect()
    }

    /// Aggregate statistics over the successful measurements.
    pub fn summary(&self) -> Result<Summary> {
        Summary::from_durations(&self.durations())
    }
}

/// Runs a fixed number of sequential probes and hands each sample to a sink.
pub struct ProbeRunner<P> {
    prober: P,
    config: ProbeConfig,
}

impl<P: Prober> ProbeRunner<P> {
    /// Create a runner that probes with `prober` according to `config`.
    pub fn new(prober: P, config: ProbeConfig) -> Self {
        Self { prober, config }
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe the target `repeats` times on behalf of `ip`.
    ///
    /// A failed probe is reported and skipped. A failed write is logged and
    /// skipped, but its duration is kept for the statistics.
    pub async fn run(&self, ip: &str, sink: &dyn SampleSink) -> RunReport {
        let mut report = RunReport {
            requested: self.config.repeats,
            ..Default::default()
        };

        info!(
            "Probing {} {} times via {} sink",
            self.config.target_url,
            self.config.repeats,
            sink.name()
        );

        for index in 1..=self.config.repeats {
            let elapsed = match self.prober.probe(&self.config.target_url).await {
                Ok(elapsed) => elapsed,
                Err(e) => {
                    println!("Request {} failed: {}", index, e);
                    report.failed_probes += 1;
                    continue;
                }
            };

            let sample = Sample::new(ip, elapsed, self.config.lang.as_str());
            report.samples.push(sample.clone());

            if let Err(e) = sink.record(index, &sample).await {
                warn!("Failed to record request {} to {}: {}", index, sink.name(), e);
                report.failed_writes += 1;
                continue;
            }

            println!("Request {} time: {:.4} ms", index, sample.duration_ms);
        }

        debug!(
            succeeded = report.samples.len(),
            failed_probes = report.failed_probes,
            failed_writes = report.failed_writes,
            "Probe run finished"
        );

        report
    }
}
