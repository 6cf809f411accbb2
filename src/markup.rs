//! Checklist Markup
//!
//! The concrete confluence checklist: five timeframe sections, each row a
//! confirmation worth a signed percentage.

use checklist_core::{Layout, RowSpec, SectionSpec, ValueOverride};

pub fn confluence_layout() -> Layout {
    Layout::new(vec![
        SectionSpec::new("weekly", "Weekly", vec![
            RowSpec::raw("Trend", "+10%"),
            RowSpec::raw("At AOI / Rejected", "+10%"),
            RowSpec::raw("Touching EMA", "+5%"),
            RowSpec::raw("Round psychological level", "+5%"),
            RowSpec::raw("Rejection from previous structure", "+10%"),
            RowSpec::raw("Candlestick rejection from AOI", "+10%"),
            RowSpec::raw("Break & retest / head & shoulders", "+10%"),
        ]),
        SectionSpec::new("daily", "Daily", vec![
            RowSpec::raw("Trend", "+10%"),
            RowSpec::raw("At AOI / Rejected", "+10%"),
            RowSpec::raw("Touching EMA", "+5%"),
            RowSpec::raw("Round psychological level", "+5%"),
            RowSpec::raw("Rejection from previous structure", "+10%"),
            RowSpec::raw("Candlestick rejection from AOI", "+10%"),
            RowSpec::raw("Break & retest / head & shoulders", "+10%"),
        ]),
        SectionSpec::new("4h", "4H", vec![
            RowSpec::raw("Trend", "+5%"),
            RowSpec::raw("At AOI / Rejected", "+5%"),
            RowSpec::raw("Touching EMA", "+5%"),
            RowSpec::raw("Round psychological level", "+5%"),
            RowSpec::raw("Rejection from previous structure", "+5%"),
            RowSpec::raw("Candlestick rejection from AOI", "+5%"),
            RowSpec::raw("Break & retest / head & shoulders", "+5%"),
        ]),
        SectionSpec::new("lower-multiples", "2H / 1H / 30m", vec![
            RowSpec::raw("Trend", "+5%"),
            RowSpec::raw("Touching EMA", "+5%"),
            RowSpec::raw("Break & retest / head & shoulders", "+5%"),
        ]),
        SectionSpec::new("lower-tf", "Entry timeframe", vec![
            RowSpec::raw("SOS (shift of structure)", "+10%"),
            RowSpec::raw("Engulfing candle", "+10%"),
            RowSpec::raw("Against higher timeframe trend", "-10%"),
        ]),
    ])
    .with_override(ValueOverride::new("4h", "Trend", 10))
}
