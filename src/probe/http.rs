//! HTTP probing and public address discovery.

use crate::error::{ProbeError, Result};
use crate::probe::traits::Prober;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

/// Prober that times plain GET requests with a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Create a prober with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prober around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client, shared with public address resolution.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Prober for HttpProber {
    /// Time from sending the request until the response head arrives.
    ///
    /// The status code is not inspected and the body is dropped unread.
    async fn probe(&self, url: &str) -> Result<Duration> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let elapsed = start.elapsed();

        debug!(status = %response.status(), ?elapsed, "Probe response from {}", url);
        Ok(elapsed)
    }
}

/// Ask an IP-echo service for this node's public address.
///
/// Returns the trimmed response body. Any network or read failure is
/// returned as-is; there is no retry.
pub async fn resolve_public_ip(client: &Client, echo_url: &str) -> Result<String> {
    let body = client.get(echo_url).send().await?.text().await?;
    let ip = body.trim();

    if ip.is_empty() {
        return Err(ProbeError::empty_response(echo_url));
    }

    debug!("Resolved public IP {} via {}", ip, echo_url);
    Ok(ip.to_string())
}
