use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::{
    api::{FileSource, HttpSource},
    core::record::{RawPriceRecord, parse_records},
    prelude::*,
};

/// Anything that can hand over a day's worth of raw price records.
#[async_trait]
pub trait RecordSource: Sync {
    /// Fetch the raw JSON array, one element per record.
    async fn fetch_values(&self) -> Result<Vec<Value>>;

    #[instrument(skip_all)]
    async fn fetch_records(&self) -> Result<Vec<RawPriceRecord>> {
        let values = self.fetch_values().await?;
        info!(n_values = values.len(), "fetched");
        Ok(parse_records(values)?)
    }
}

/// Where to read the records from, as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(Url),
}

impl Source {
    pub fn try_into_record_source(self) -> Result<Box<dyn RecordSource + Send>> {
        Ok(match self {
            Self::File(path) => Box::new(FileSource::new(path)),
            Self::Http(url) => Box::new(HttpSource::try_new(url)?),
        })
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Http(Url::parse(s).with_context(|| format!("invalid URL `{s}`"))?))
        } else {
            ensure!(!s.is_empty(), "the source path must not be empty");
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}
