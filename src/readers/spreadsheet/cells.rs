//! Coercion of spreadsheet cells into the text and amount values a raw row
//! carries.

use calamine::{Data, DataType};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use crate::{readers::columns::parse_amount, types::Amount};

/// Numeric cells convert directly. Anything else with content goes through
/// the text parser, which keeps what it cannot read.
pub(super) fn amount(cell: &Data) -> Option<Amount> {
    match cell {
        Data::Int(value) => Some(Decimal::from(*value).into()),
        Data::Float(value) => Decimal::from_f64(*value)
            .map(Amount::from)
            .or_else(|| parse_amount(&float_text(*value))),
        Data::String(text) => parse_amount(text),
        other => text(other).and_then(|text| parse_amount(&text)),
    }
}

pub(super) fn text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        Data::Float(value) => Some(float_text(*value)),
        other => Some(other.to_string()),
    }
}

/// Dates usually arrive as the number `20240115`; cells formatted as dates
/// are rendered in the same `YYYYMMDD` shape.
pub(super) fn date(cell: &Data) -> Option<String> {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(|datetime| datetime.format("%Y%m%d").to_string())
            .or_else(|| text(cell)),
        _ => text(cell),
    }
}

/// Whole floats print without a fractional part, as a spreadsheet shows them.
fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}
