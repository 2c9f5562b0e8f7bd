use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Timelike};
use serde::Serialize;

/// Start of the hour a timestamp falls into, as `HH:MM` in the reference offset.
///
/// The hour bucket is taken in absolute time, so for offsets that are not whole hours
/// the label carries the minutes, e.g. `18:30` at `+05:30`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct HourLabel(String);

impl HourLabel {
    /// ISO 8601 without seconds, which RFC 3339 does not allow.
    const MINUTE_PRECISION_FORMAT: &'static str = "%Y-%m-%dT%H:%M%#z";

    /// Parse an ISO 8601 timestamp and label its hour.
    ///
    /// The error is the one from the RFC 3339 parser when no format matches.
    pub fn try_from_timestamp(
        timestamp: &str,
        reference: FixedOffset,
    ) -> Result<Self, chrono::ParseError> {
        let instant = DateTime::parse_from_rfc3339(timestamp).or_else(|error| {
            DateTime::parse_from_str(timestamp, Self::MINUTE_PRECISION_FORMAT).map_err(|_| error)
        })?;
        Ok(Self::from_instant(&instant, reference))
    }

    #[must_use]
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>, reference: FixedOffset) -> Self {
        let utc = instant.to_utc();
        let since_hour_start = TimeDelta::minutes(i64::from(utc.minute()))
            + TimeDelta::seconds(i64::from(utc.second()));
        let start_time = instant.with_timezone(&reference).time() - since_hour_start;
        Self(start_time.format("%H:%M").to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Offset, Utc};

    use super::*;

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    #[test]
    fn test_whole_hour() -> Result<(), chrono::ParseError> {
        assert_eq!(HourLabel::try_from_timestamp("2025-01-01T02:00:00Z", utc())?.as_str(), "02:00");
        Ok(())
    }

    #[test]
    fn test_same_bucket_same_label() -> Result<(), chrono::ParseError> {
        let early = HourLabel::try_from_timestamp("2025-03-06T13:00:00Z", utc())?;
        let late = HourLabel::try_from_timestamp("2025-03-06T13:59:59.999Z", utc())?;
        assert_eq!(early, late);
        assert_eq!(early.as_str(), "13:00");
        Ok(())
    }

    #[test]
    fn test_source_offset_is_normalized() -> Result<(), chrono::ParseError> {
        let label = HourLabel::try_from_timestamp("2025-03-06T15:20:00+02:00", utc())?;
        assert_eq!(label.as_str(), "13:00");
        Ok(())
    }

    #[test]
    fn test_reference_offset_wraps_midnight() -> Result<(), chrono::ParseError> {
        let reference = FixedOffset::east_opt(2 * 3600).unwrap();
        let label = HourLabel::try_from_timestamp("2025-03-06T23:30:00Z", reference)?;
        assert_eq!(label.as_str(), "01:00");
        Ok(())
    }

    #[test]
    fn test_half_hour_offset() -> Result<(), chrono::ParseError> {
        let reference = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let early = HourLabel::try_from_timestamp("2025-03-06T13:10:00Z", reference)?;
        let late = HourLabel::try_from_timestamp("2025-03-06T13:40:00Z", reference)?;
        assert_eq!(early, late);
        assert_eq!(early.as_str(), "18:30");
        Ok(())
    }

    #[test]
    fn test_minute_precision() -> Result<(), chrono::ParseError> {
        assert_eq!(HourLabel::try_from_timestamp("2025-01-01T00:00Z", utc())?.as_str(), "00:00");
        let label = HourLabel::try_from_timestamp("2025-01-01T05:30+02:00", utc())?;
        assert_eq!(label.as_str(), "03:00");
        Ok(())
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(HourLabel::try_from_timestamp("yesterday at noon", utc()).is_err());
        assert!(HourLabel::try_from_timestamp("2025-01-01 25:00", utc()).is_err());
        assert!(HourLabel::try_from_timestamp("2025-01-01T00:00", utc()).is_err());
    }
}
