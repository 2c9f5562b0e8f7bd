use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{Analysis, Summary},
    quantity::price::KilowattHourCents,
};

const BAR: char = '█';

#[must_use]
pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Hour", "Price"]);
    table.add_row(vec![
        Cell::new("Cheapest"),
        Cell::new(&summary.cheapest_hour),
        Cell::new(format!("{:.2}", summary.cheapest))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Priciest"),
        Cell::new(&summary.priciest_hour),
        Cell::new(format!("{:.2}", summary.priciest))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Average"),
        Cell::new(""),
        Cell::new(format!("{:.2}", summary.average)).set_alignment(CellAlignment::Right),
    ]);
    table
}

/// Horizontal bar chart: one row per chart point, bars at or above the average are red.
#[must_use]
pub fn build_chart_table(analysis: &Analysis, bar_width: u16) -> Table {
    let average = analysis.summary.average;
    let max = analysis.summary.priciest;

    let mut table = new_table();
    table.set_header(vec!["Hour", KilowattHourCents::SUFFIX, ""]);
    for (label, value) in analysis.chart.iter() {
        let color = if value >= average { Color::Red } else { Color::Green };
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.2}", value.0)).set_alignment(CellAlignment::Right),
            Cell::new(bar(value, max, bar_width)).fg(color),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Bar proportional to `value / max`; non-positive values get no bar.
fn bar(value: KilowattHourCents, max: KilowattHourCents, width: u16) -> String {
    if value <= KilowattHourCents::ZERO || max <= KilowattHourCents::ZERO {
        return String::new();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let length = ((value / max) * f64::from(width)).round() as usize;
    BAR.to_string().repeat(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriceSeriesAnalyzer, record::RawPriceRecord};

    #[test]
    fn test_bar_scaling() {
        let max = KilowattHourCents(10.0);
        assert_eq!(bar(KilowattHourCents(10.0), max, 40).chars().count(), 40);
        assert_eq!(bar(KilowattHourCents(5.0), max, 40).chars().count(), 20);
        assert_eq!(bar(KilowattHourCents(0.1), max, 40).chars().count(), 0);
    }

    #[test]
    fn test_non_positive_bars_are_empty() {
        assert!(bar(KilowattHourCents(-1.0), KilowattHourCents(10.0), 40).is_empty());
        assert!(bar(KilowattHourCents(0.0), KilowattHourCents(10.0), 40).is_empty());
        assert!(bar(KilowattHourCents(-1.0), KilowattHourCents(-0.5), 40).is_empty());
    }

    #[test]
    fn test_tables_render_every_hour() -> crate::prelude::Result {
        let records: Vec<_> = [5.0, 10.0, 2.0]
            .into_iter()
            .enumerate()
            .map(|(hour, price)| RawPriceRecord {
                price: price.into(),
                timestamp: format!("2025-01-01T{hour:02}:00:00Z"),
                unit: String::new(),
                delivery_area: String::new(),
            })
            .collect();
        let analysis = PriceSeriesAnalyzer::default().analyze(&records)?;

        let summary = build_summary_table(&analysis.summary).to_string();
        assert!(summary.contains("02:00"));
        assert!(summary.contains("1.25 c/kWh") || summary.contains("1.26 c/kWh"));

        let chart = build_chart_table(&analysis, 10).to_string();
        for label in ["00:00", "01:00", "02:00"] {
            assert!(chart.contains(label), "{label} is missing");
        }
        assert!(chart.contains(&BAR.to_string().repeat(10)));
        Ok(())
    }
}
