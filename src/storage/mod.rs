//! Sample destinations: the document store or the terminal.

pub mod config;
pub mod console;
pub mod mongo;

// Re-export commonly used items
pub use config::StorageConfig;
pub use console::ConsoleSink;
pub use mongo::MongoSink;

use crate::error::Result;
use crate::probe::SampleSink;
use tracing::info;

/// Open the sink a run should write to.
///
/// With no configuration samples go to the console. A configured store that
/// cannot be reached is an error.
pub async fn open_sink(config: Option<&StorageConfig>) -> Result<Box<dyn SampleSink>> {
    match config {
        Some(config) => Ok(Box::new(MongoSink::connect(config).await?)),
        None => {
            info!("No document store configured, printing samples");
            Ok(Box::new(ConsoleSink))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_no_config_opens_console() {
        let sink = open_sink(None).await.unwrap();
        assert_eq!(sink.name(), "console");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_fatal_and_bounded() {
        let config = StorageConfig::new("mongodb://127.0.0.1:1", "probes", "latency")
            .with_connect_timeout_secs(1);

        let started = Instant::now();
        let result = tokio::time::timeout(Duration::from_secs(10), open_sink(Some(&config)))
            .await
            .expect("Handshake should give up on its own");

        assert!(matches!(
            result,
            Err(ProbeError::Storage(_) | ProbeError::ConnectTimeout(_))
        ));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
