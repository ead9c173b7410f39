//! # Latency Probe - HTTP Round-Trip Measurement
//!
//! A small Rust crate for measuring round-trip latency to an HTTP endpoint
//! from the node it runs on, with optional collection of every sample in
//! MongoDB for fleet-wide comparison.
//!
//! ## Features
//!
//! - **Public address discovery**: tags each sample with the node's public IP
//! - **Sequential probing**: a fixed number of timed GET requests
//! - **Summary statistics**: min, max, median and mean over successful probes
//! - **Optional persistence**: one document per sample, or console output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use latency_probe::{
//!     resolve_public_ip, ConsoleSink, HttpProber, ProbeConfig, ProbeRunner,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProbeConfig::default().with_repeats(5);
//!     let prober = HttpProber::new();
//!     let ip = resolve_public_ip(prober.client(), &config.ip_echo_url).await?;
//!
//!     let report = ProbeRunner::new(prober, config).run(&ip, &ConsoleSink).await;
//!     println!("{}", report.summary()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod probe;
pub mod storage;

// Re-export public API
pub use error::{ProbeError, Result};
pub use probe::{
    data::Sample,
    http::{resolve_public_ip, HttpProber},
    runner::{ProbeConfig, ProbeRunner, RunReport},
    stats::Summary,
    traits::{Prober, SampleSink},
};
pub use storage::{open_sink, ConsoleSink, MongoSink, StorageConfig};

/// The default number of probes per run
pub const DEFAULT_REPEATS: usize = 10;

/// The default latency target
pub const DEFAULT_TARGET_URL: &str = "https://api.bybit.com/v2/public/time";

/// The default IP-echo service
pub const DEFAULT_IP_ECHO_URL: &str = "http://checkip.amazonaws.com/";

/// The implementation tag stored with each sample
pub const DEFAULT_LANG: &str = "rust";

/// Upper bound on the initial document store handshake, in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
