use serde::Serialize;

use crate::quantity::price::{KilowattHourCents, MegawattHourPrice};

/// Converts a wholesale market price into the consumer-facing display price:
///
/// `display = raw × scale × (1 + tax_rate)`
///
/// The same rule must be applied to every figure derived from one batch.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ConversionRule {
    /// Unit conversion factor, €/MWh to c/kWh by default.
    pub scale: f64,

    /// Fractional surcharge on top of the scaled price.
    pub tax_rate: f64,
}

impl ConversionRule {
    /// 1 €/MWh = 0.1 c/kWh.
    pub const DEFAULT_SCALE: f64 = 0.1;

    /// Finnish VAT on electricity since 2024-09-01.
    pub const DEFAULT_TAX_RATE: f64 = 0.255;

    pub const fn new(scale: f64, tax_rate: f64) -> Self {
        Self { scale, tax_rate }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        self.scale * (1.0 + self.tax_rate)
    }

    #[must_use]
    pub fn apply(self, raw: MegawattHourPrice) -> KilowattHourCents {
        KilowattHourCents(raw.0 * self.factor())
    }
}

impl Default for ConversionRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE, Self::DEFAULT_TAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_default_rule() {
        let rule = ConversionRule::default();
        assert_abs_diff_eq!(rule.apply(MegawattHourPrice(10.0)).0, 1.255, epsilon = 1e-9);
        assert_abs_diff_eq!(rule.apply(MegawattHourPrice(2.0)).0, 0.251, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_price_stays_negative() {
        let rule = ConversionRule::default();
        assert_abs_diff_eq!(rule.apply(MegawattHourPrice(-4.0)).0, -0.502, epsilon = 1e-9);
    }

    #[test]
    fn test_no_tax() {
        let rule = ConversionRule::new(0.1, 0.0);
        assert_abs_diff_eq!(rule.apply(MegawattHourPrice(123.4)).0, 12.34, epsilon = 1e-9);
    }
}
