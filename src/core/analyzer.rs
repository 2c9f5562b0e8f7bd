use bon::Builder;
use chrono::{FixedOffset, Offset, Utc};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{
        conversion::ConversionRule,
        error::{AnalysisError, MalformedReason},
        hour::HourLabel,
        record::RawPriceRecord,
    },
    prelude::*,
    quantity::price::{KilowattHourCents, MegawattHourPrice},
};

/// Day summary, all prices in the display unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average: KilowattHourCents,
    pub cheapest: KilowattHourCents,
    pub cheapest_hour: HourLabel,
    pub priciest: KilowattHourCents,
    pub priciest_hour: HourLabel,
}

/// Per-record bar chart data in the input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<HourLabel>,
    pub values: Vec<KilowattHourCents>,
}

impl ChartSeries {
    pub fn iter(&self) -> impl Iterator<Item = (&HourLabel, KilowattHourCents)> {
        self.labels.iter().zip(self.values.iter().copied())
    }
}

/// Result of one analysis pass, to be held and rendered as a whole.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: Summary,
    pub chart: ChartSeries,
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct PriceSeriesAnalyzer {
    #[builder(default)]
    conversion: ConversionRule,

    /// Offset in which the hour labels are rendered.
    #[builder(default = Utc.fix())]
    reference: FixedOffset,
}

impl Default for PriceSeriesAnalyzer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PriceSeriesAnalyzer {
    pub const fn conversion(&self) -> ConversionRule {
        self.conversion
    }

    /// Summarize the records and build the chart series.
    ///
    /// Every record is validated before anything is computed: the first malformed one
    /// fails the whole batch. Ties between equal extrema go to the earliest record.
    #[instrument(skip_all, fields(n_records = records.len()))]
    pub fn analyze(&self, records: &[RawPriceRecord]) -> Result<Analysis, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let labels = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.label(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        let (cheapest_index, priciest_index) = first_extrema(records);
        let raw_average = mean(records)
            .clamp(records[cheapest_index].price, records[priciest_index].price);

        let summary = Summary {
            average: self.conversion.apply(raw_average),
            cheapest: self.conversion.apply(records[cheapest_index].price),
            cheapest_hour: labels[cheapest_index].clone(),
            priciest: self.conversion.apply(records[priciest_index].price),
            priciest_hour: labels[priciest_index].clone(),
        };
        debug!(
            average = %summary.average,
            cheapest = %summary.cheapest,
            cheapest_hour = %summary.cheapest_hour,
            priciest = %summary.priciest,
            priciest_hour = %summary.priciest_hour,
            "analyzed"
        );

        let values = records.iter().map(|record| self.conversion.apply(record.price)).collect_vec();
        Ok(Analysis { summary, chart: ChartSeries { labels, values } })
    }

    fn label(&self, index: usize, record: &RawPriceRecord) -> Result<HourLabel, AnalysisError> {
        if !record.price.is_finite() {
            return Err(AnalysisError::malformed(
                index,
                MalformedReason::NonFinitePrice(record.price.0),
            ));
        }
        HourLabel::try_from_timestamp(&record.timestamp, self.reference).map_err(|source| {
            AnalysisError::malformed(
                index,
                MalformedReason::InvalidTimestamp { timestamp: record.timestamp.clone(), source },
            )
        })
    }
}

/// Arithmetic mean of the prices.
///
/// Each term is divided before summing, so finite prices never overflow the total.
/// Rounding may still put the result a step outside the extrema.
fn mean(records: &[RawPriceRecord]) -> MegawattHourPrice {
    #[allow(clippy::cast_precision_loss)]
    let n_records = records.len() as f64;
    records.iter().map(|record| record.price / n_records).sum()
}

/// Indices of the first cheapest and the first priciest record.
///
/// Expects a non-empty slice.
fn first_extrema(records: &[RawPriceRecord]) -> (usize, usize) {
    let mut cheapest = 0;
    let mut priciest = 0;
    for (index, record) in records.iter().enumerate().skip(1) {
        if record.price < records[cheapest].price {
            cheapest = index;
        }
        if record.price > records[priciest].price {
            priciest = index;
        }
    }
    (cheapest, priciest)
}
