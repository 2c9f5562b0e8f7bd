use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::{api::RecordSource, prelude::*};

/// JSON array served over HTTP, for example `/data/spot-data.json` next to the frontend.
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn try_new(url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    /// Single attempt: a non-success status fails the fetch.
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch_values(&self) -> Result<Vec<Value>> {
        info!("fetching…");
        self.client
            .get(self.url.clone())
            .send()
            .await
            .context("failed to call")?
            .error_for_status()
            .context("request failed")?
            .json::<Vec<Value>>()
            .await
            .context("failed to deserialize the response")
    }
}
