use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::{api::RecordSource, prelude::*};

/// JSON array stored on the local disk.
pub struct FileSource(PathBuf);

impl FileSource {
    pub const fn new(path: PathBuf) -> Self {
        Self(path)
    }
}

#[async_trait]
impl RecordSource for FileSource {
    #[instrument(skip_all, fields(path = %self.0.display()))]
    async fn fetch_values(&self) -> Result<Vec<Value>> {
        debug!("reading…");
        let contents = tokio::fs::read(&self.0)
            .await
            .with_context(|| format!("failed to read `{}`", self.0.display()))?;
        serde_json::from_slice(&contents).context("expected a JSON array of price records")
    }
}
