use chrono::FixedOffset;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    api::Source,
    core::{ConversionRule, PriceSeriesAnalyzer},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the day's spot prices, print the summary and the hourly bar chart.
    #[clap(name = "show")]
    Show(Box<ShowArgs>),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Local path or `http(s)://` URL of the JSON array of price records.
    #[clap(long, env = "SPOT_DATA_SOURCE", default_value = "data/spot-data.json")]
    pub source: Source,

    #[clap(flatten)]
    pub conversion: ConversionArgs,

    /// Offset in which the hours are shown, for example `+02:00`.
    #[clap(
        long = "reference-offset",
        env = "REFERENCE_OFFSET",
        default_value = "+00:00",
        allow_hyphen_values = true
    )]
    pub reference_offset: FixedOffset,

    /// Width of the longest bar in the chart, in characters.
    #[clap(long = "bar-width", default_value = "40", env = "BAR_WIDTH")]
    pub bar_width: u16,

    #[clap(long, value_enum, default_value = "table", env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

impl ShowArgs {
    pub fn analyzer(&self) -> PriceSeriesAnalyzer {
        PriceSeriesAnalyzer::builder()
            .conversion(self.conversion.rule())
            .reference(self.reference_offset)
            .build()
    }
}

#[derive(Copy, Clone, Parser)]
pub struct ConversionArgs {
    /// Multiplier from the market unit to the display unit (€/MWh to c/kWh).
    #[clap(long = "scale", default_value_t = ConversionRule::DEFAULT_SCALE, env = "PRICE_SCALE")]
    pub scale: f64,

    /// Value-added tax as a fraction, `0.255` is 25.5%.
    #[clap(
        long = "tax-rate",
        default_value_t = ConversionRule::DEFAULT_TAX_RATE,
        env = "PRICE_TAX_RATE"
    )]
    pub tax_rate: f64,
}

impl ConversionArgs {
    pub const fn rule(self) -> ConversionRule {
        ConversionRule::new(self.scale, self.tax_rate)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// The whole analysis as pretty-printed JSON.
    Json,
}
