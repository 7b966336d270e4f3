use serde::Deserialize;

use crate::{readers::columns::parse_amount, types::RawTransactionRow};

/// A CSV record as written by the bank. Missing columns and empty fields
/// both come through as `None`.
#[derive(Debug, Deserialize)]
pub(super) struct CsvRowRaw {
    #[serde(rename = "Transactiebedrag", default)]
    pub(super) amount: Option<String>,
    #[serde(rename = "Omschrijving", default)]
    pub(super) description: Option<String>,
    #[serde(rename = "Transactiedatum", default)]
    pub(super) date: Option<String>,
}

impl From<CsvRowRaw> for RawTransactionRow {
    fn from(raw: CsvRowRaw) -> Self {
        RawTransactionRow {
            amount: raw.amount.as_deref().and_then(parse_amount),
            description: raw.description,
            date: raw.date,
        }
    }
}
