quantity!(
    /// Wholesale market price in euros per megawatt-hour, as published by the exchange.
    MegawattHourPrice,
    suffix: "€/MWh"
);

quantity!(
    /// Consumer-facing price in euro cents per kilowatt-hour, VAT included.
    KilowattHourCents,
    suffix: "c/kWh"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forwards_precision() {
        assert_eq!(format!("{:.2}", KilowattHourCents(0.6275)), "0.63 c/kWh");
        assert_eq!(MegawattHourPrice(42.5).to_string(), "42.5 €/MWh");
    }

    #[test]
    fn test_ordering() {
        assert!(KilowattHourCents(0.251) < KilowattHourCents(1.255));
        assert_eq!(MegawattHourPrice(2.0).max(MegawattHourPrice(10.0)), MegawattHourPrice(10.0));
    }

    #[test]
    fn test_sum() {
        let total: MegawattHourPrice =
            [5.0, 10.0, 2.0].into_iter().map(MegawattHourPrice).sum();
        assert_eq!(total, MegawattHourPrice(17.0));
    }
}
