//! Latency probing, measurement records, and statistics.
//!
//! A run resolves the node's public address once, times a fixed number of
//! sequential requests against a target, and hands each successful
//! measurement to a [`SampleSink`].

pub mod data;
pub mod http;
pub mod runner;
pub mod stats;
pub mod traits;

// Re-export commonly used items
pub use data::Sample;
pub use http::{resolve_public_ip, HttpProber};
pub use runner::{ProbeConfig, ProbeRunner, RunReport};
pub use stats::Summary;
pub use traits::{Prober, SampleSink};
