use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::error::{AnalysisError, MalformedReason},
    quantity::price::MegawattHourPrice,
};

/// Spot price for one delivery period, as received from the data source.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRecord {
    pub price: MegawattHourPrice,

    /// RFC 3339 start of the delivery period.
    pub timestamp: String,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub delivery_area: String,
}

impl RawPriceRecord {
    /// Deserialize the record at `index` of the fetched array.
    pub fn try_from_json(index: usize, value: Value) -> Result<Self, AnalysisError> {
        serde_json::from_value(value)
            .map_err(|error| AnalysisError::malformed(index, MalformedReason::NotARecord(error)))
    }
}

/// Deserialize every element of a fetched JSON array, stopping at the first malformed one.
pub fn parse_records(values: Vec<Value>) -> Result<Vec<RawPriceRecord>, AnalysisError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| RawPriceRecord::try_from_json(index, value))
        .collect()
}
