use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::Amount;

pub const AMOUNT_COLUMN: &str = "Transactiebedrag";
pub const DESCRIPTION_COLUMN: &str = "Omschrijving";
pub const DATE_COLUMN: &str = "Transactiedatum";

/// Positions of the expected columns in a header row. Names must match
/// exactly; a column that is not found stays `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    pub amount: Option<usize>,
    pub description: Option<usize>,
    pub date: Option<usize>,
}

impl ColumnIndex {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = ColumnIndex::default();

        for (position, header) in headers.into_iter().enumerate() {
            let slot = match header.as_ref() {
                AMOUNT_COLUMN => &mut index.amount,
                DESCRIPTION_COLUMN => &mut index.description,
                DATE_COLUMN => &mut index.date,
                _ => continue,
            };
            // First occurrence wins on duplicated headers
            slot.get_or_insert(position);
        }

        index
    }

    /// Names of the expected columns that the header row lacks.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.amount, AMOUNT_COLUMN),
            (self.description, DESCRIPTION_COLUMN),
            (self.date, DATE_COLUMN),
        ]
        .into_iter()
        .filter(|(position, _)| position.is_none())
        .map(|(_, name)| name)
        .collect()
    }
}

/// Parses an amount written as text, in either `1234.56` or Dutch
/// `1.234,56` notation. Text that is still not a number is kept as
/// [`Amount::Text`] rather than dropped.
pub fn parse_amount(text: &str) -> Option<Amount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_str(&with_decimal_point(trimmed)));

    match parsed {
        Ok(amount) => Some(amount.into()),
        Err(err) => {
            warn!(amount = trimmed, %err, "keeping unparseable amount as text");
            Some(Amount::Text(trimmed.to_string()))
        }
    }
}

/// Drops grouping separators and turns a decimal comma into a point. The
/// separator that comes last is the decimal one.
fn with_decimal_point(text: &str) -> String {
    match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(point)) if comma > point => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        (None, Some(_)) if text.matches('.').count() > 1 => text.replace('.', ""),
        _ => text.to_string(),
    }
}
