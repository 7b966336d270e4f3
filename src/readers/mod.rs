//! Readers turning an export file into ordered [`RawTransactionRow`]s.
//!
//! [`RawTransactionRow`]: crate::RawTransactionRow

pub mod columns;
pub mod csv;
pub mod spreadsheet;
pub mod traits;

pub mod prelude {
    pub use super::csv::CsvReader;
    pub use super::spreadsheet::SpreadsheetReader;
    pub use super::traits::RowReader;
}
