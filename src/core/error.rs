use thiserror::Error;

/// Why the price series could not be analyzed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Statistics over zero records are undefined.
    #[error("no price records to analyze")]
    EmptyInput,

    #[error("malformed price record #{index}: {reason}")]
    MalformedRecord {
        /// Position of the offending record in the input.
        index: usize,

        #[source]
        reason: MalformedReason,
    },
}

impl AnalysisError {
    pub fn malformed(index: usize, reason: MalformedReason) -> Self {
        Self::MalformedRecord { index, reason }
    }
}

#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("price is not a finite number: {0}")]
    NonFinitePrice(f64),

    #[error("timestamp `{timestamp}` is not a valid instant")]
    InvalidTimestamp {
        timestamp: String,

        #[source]
        source: chrono::ParseError,
    },

    /// The element is not an object with a numeric `price` and a string `timestamp`.
    #[error("not a price record")]
    NotARecord(#[source] serde_json::Error),
}
