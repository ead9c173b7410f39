//! MongoDB sink.

use crate::error::{ProbeError, Result};
use crate::probe::{Sample, SampleSink};
use crate::storage::config::StorageConfig;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{Acknowledgment, ClientOptions, WriteConcern};
use mongodb::{Client, Collection};
use tracing::{debug, info};

/// Inserts each sample as its own document with majority acknowledgement.
#[derive(Debug, Clone)]
pub struct MongoSink {
    client: Client,
    collection: Collection<Sample>,
}

impl MongoSink {
    /// Connect and verify the deployment answers within the configured timeout.
    ///
    /// The driver connects lazily, so a `ping` is issued to force the
    /// handshake inside the bound.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        let timeout = config.connect_timeout();

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.write_concern = Some(WriteConcern::builder().w(Acknowledgment::Majority).build());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        tokio::time::timeout(timeout, database.run_command(doc! { "ping": 1 }, None))
            .await
            .map_err(|_| ProbeError::ConnectTimeout(timeout))??;

        info!(
            "Connected to MongoDB, writing to {}.{}",
            config.database, config.collection
        );

        Ok(Self {
            collection: database.collection::<Sample>(&config.collection),
            client,
        })
    }
}

#[async_trait]
impl SampleSink for MongoSink {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    async fn record(&self, index: usize, sample: &Sample) -> Result<()> {
        let result = self.collection.insert_one(sample, None).await?;
        debug!("Stored request {} as {}", index, result.inserted_id);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
