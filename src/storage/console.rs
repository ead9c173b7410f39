//! Console sink used when no document store is configured.

use crate::error::Result;
use crate::probe::{Sample, SampleSink};
use async_trait::async_trait;

/// Prints every sample to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// The line printed for one sample.
    pub fn format_line(index: usize, sample: &Sample) -> String {
        format!("Request {}: {}", index, sample)
    }
}

#[async_trait]
impl SampleSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn record(&self, index: usize, sample: &Sample) -> Result<()> {
        println!("{}", Self::format_line(index, sample));
        Ok(())
    }
}
