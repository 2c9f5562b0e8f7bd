pub mod analyzer;
pub mod conversion;
pub mod error;
pub mod hour;
pub mod record;

pub use self::{
    analyzer::{Analysis, PriceSeriesAnalyzer, Summary},
    conversion::ConversionRule,
};
