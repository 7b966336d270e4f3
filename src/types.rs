use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payee;

pub const NO_DESCRIPTION: &str = "No description available";

/// Time-of-day suffix appended to source dates to form an OFX datetime
const MIDNIGHT_SUFFIX: &str = "000000";

/// One row of the bank export, as read from the sheet.
///
/// Every field is optional: a missing column or an empty cell is `None` and
/// degrades to a fallback during normalization instead of failing the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRow {
    pub amount: Option<Amount>,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// Transaction amount as found in the export.
///
/// Text that is not a number in either notation stays `Text` and is written
/// to `TRNAMT` verbatim, so a malformed figure is never replaced by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Amount {
    Decimal(Decimal),
    Text(String),
}

impl Amount {
    /// Sign of the amount; for unparsed text, a leading minus.
    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Decimal(value) => *value < Decimal::ZERO,
            Amount::Text(text) => text.trim_start().starts_with('-'),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Decimal(Decimal::ZERO)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Decimal(value) => fmt::Display::fmt(value, f),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    /// Negative amounts are debits; zero counts as a credit.
    pub fn from_amount(amount: &Amount) -> Self {
        if amount.is_negative() {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "DEBIT",
            TransactionKind::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTransaction {
    pub kind: TransactionKind,
    pub posted_date: String,
    pub amount: Amount,
    pub id: String,
    pub payee: String,
    pub memo: String,
}

impl NormalizedTransaction {
    /// Builds the transaction for the row at zero-based `index`.
    pub fn from_row(row: &RawTransactionRow, index: usize) -> Self {
        let amount = row.amount.clone().unwrap_or_default();
        let description = row.description.as_deref().unwrap_or_default();

        let memo = if description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };

        NormalizedTransaction {
            kind: TransactionKind::from_amount(&amount),
            posted_date: format_date(row.date.as_deref()),
            amount,
            id: format!("T{index}"),
            payee: payee::classify(description),
            memo,
        }
    }
}

/// Normalizes one row; see [`NormalizedTransaction::from_row`].
pub fn normalize(row: &RawTransactionRow, index: usize) -> NormalizedTransaction {
    NormalizedTransaction::from_row(row, index)
}

/// Appends the midnight time suffix. The date itself is not validated.
pub fn format_date(date: Option<&str>) -> String {
    format!("{}{}", date.unwrap_or_default(), MIDNIGHT_SUFFIX)
}
