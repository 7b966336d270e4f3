use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::{debug, warn};

use super::cells;
use crate::{
    errors::{ConvertError, ConvertResult},
    readers::{
        columns::ColumnIndex,
        traits::{RowReader, extension},
    },
    types::RawTransactionRow,
};

const EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "xla", "xlam", "ods"];

/// Reads the first sheet of an Excel or OpenDocument workbook.
pub struct SpreadsheetReader;

impl SpreadsheetReader {
    /// Turns a sheet into rows, using its first row as the header.
    pub fn rows_from_range(range: &Range<Data>) -> Vec<RawTransactionRow> {
        let mut rows = range.rows();

        let Some(header) = rows.next() else {
            return Vec::new();
        };
        let index = ColumnIndex::from_headers(header.iter().map(|cell| cell.to_string()));
        let missing = index.missing();
        if !missing.is_empty() {
            warn!(?missing, "sheet header lacks expected columns");
        }

        rows.filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| {
                let cell = |position: Option<usize>| position.and_then(|p| row.get(p));
                RawTransactionRow {
                    amount: cell(index.amount).and_then(cells::amount),
                    description: cell(index.description).and_then(cells::text),
                    date: cell(index.date).and_then(cells::date),
                }
            })
            .collect()
    }
}

impl RowReader for SpreadsheetReader {
    fn read(path: &Path) -> ConvertResult<Vec<RawTransactionRow>> {
        let mut workbook = open_workbook_auto(path)?;

        if let Some(name) = workbook.sheet_names().first() {
            debug!(sheet = %name, "reading first sheet");
        }
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ConvertError::EmptyWorkbook)??;

        let rows = Self::rows_from_range(&range);
        debug!(rows = rows.len(), "read spreadsheet rows");
        Ok(rows)
    }

    fn is_supported(path: &Path) -> bool {
        extension(path).is_some_and(|ext| EXTENSIONS.contains(&ext.as_str()))
    }
}
