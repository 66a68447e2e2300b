use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Abbreviated `es-ES` month name for a 1-based month number.
///
/// Out-of-range months wrap instead of panicking.
#[must_use]
pub fn month_abbreviation_es(month: u32) -> &'static str {
    let index = (month.max(1) - 1) % 12;
    MONTHS_ES[index as usize]
}
