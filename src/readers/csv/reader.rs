use std::{fs, path::Path};

use csv::ReaderBuilder;
use tracing::{debug, warn};

use super::dto::CsvRowRaw;
use crate::{
    errors::ConvertResult,
    readers::{
        columns::ColumnIndex,
        traits::{RowReader, extension},
    },
    types::RawTransactionRow,
};

pub struct CsvReader;

impl CsvReader {
    /// Parses CSV text with a header row. Delimiter is `,`, or `;` when the
    /// header line contains semicolons but no commas.
    pub fn parse(content: &str) -> ConvertResult<Vec<RawTransactionRow>> {
        let delimiter = detect_delimiter(content);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();

        // Only used to report absent columns; serde maps the fields by name.
        let missing = ColumnIndex::from_headers(headers.iter()).missing();
        if !missing.is_empty() {
            warn!(?missing, "CSV header lacks expected columns");
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let raw: CsvRowRaw = record.deserialize(Some(&headers))?;
            rows.push(raw.into());
        }

        debug!(rows = rows.len(), delimiter = %(delimiter as char), "read CSV rows");
        Ok(rows)
    }
}

impl RowReader for CsvReader {
    fn read(path: &Path) -> ConvertResult<Vec<RawTransactionRow>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn is_supported(path: &Path) -> bool {
        extension(path).is_some_and(|ext| ext == "csv")
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or_default();
    if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Amount, TransactionKind, normalize};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::{path::PathBuf, str::FromStr};

    const SAMPLE_CSV: &str = r#"Rekeningnummer,Transactiedatum,Transactiebedrag,Omschrijving
123456789,20240115,-50.25,"BEA, Betaalpas                   Albert Heijn 1234,PAS123"
123456789,20240116,1500.00,/TRTP/SEPA/NAME/ACME Corp/REMI/Salary/
"#;

    #[rstest]
    #[case("statement.csv", true)]
    #[case("statement.CSV", true)]
    #[case("statement.xlsx", false)]
    #[case("statement", false)]
    fn test_is_supported(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(CsvReader::is_supported(&PathBuf::from(path)), expected);
    }

    #[test]
    fn test_parse_keeps_row_order() {
        let rows = CsvReader::parse(SAMPLE_CSV).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, Some(Decimal::from_str("-50.25").unwrap().into()));
        assert_eq!(rows[0].date.as_deref(), Some("20240115"));
        assert_eq!(
            rows[0].description.as_deref(),
            Some("BEA, Betaalpas                   Albert Heijn 1234,PAS123")
        );
        assert_eq!(rows[1].amount, Some(Decimal::from_str("1500.00").unwrap().into()));
    }

    #[test]
    fn test_parse_semicolon_with_decimal_comma() {
        let content = "Transactiedatum;Transactiebedrag;Omschrijving\n20240115;-50,25;Some text\n";
        let rows = CsvReader::parse(content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, Some(Decimal::from_str("-50.25").unwrap().into()));
        assert_eq!(rows[0].description.as_deref(), Some("Some text"));
    }

    #[test]
    fn test_parse_missing_columns_degrade() {
        let content = "Transactiebedrag,Other\n-1.00,x\n";
        let rows = CsvReader::parse(content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, Some(Decimal::from_str("-1.00").unwrap().into()));
        assert_eq!(rows[0].description, None);
        assert_eq!(rows[0].date, None);
    }

    #[test]
    fn test_parse_header_only() {
        let rows = CsvReader::parse("Transactiedatum,Transactiebedrag,Omschrijving\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let content = "Transactiedatum,Transactiebedrag,Omschrijving\n,,\n20240101,1,a\n";
        let rows = CsvReader::parse(content).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parse_keeps_rows_with_only_other_columns() {
        let content = "\
Rekeningnummer,Muntsoort,Transactiedatum,Transactiebedrag,Omschrijving
123456789,EUR,,,
123456789,EUR,20240115,-5.00,Shop
";
        let rows = CsvReader::parse(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], RawTransactionRow::default());

        let ids: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| normalize(row, index).id)
            .collect();
        assert_eq!(ids, ["T0", "T1"]);
    }

    #[test]
    fn test_parse_dutch_amounts() {
        let content = "\
Transactiedatum;Transactiebedrag;Omschrijving
20240115;-1.234,56;Huur
20240116;-€ 12,00;Shop
";
        let rows = CsvReader::parse(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, Some(Decimal::from_str("-1234.56").unwrap().into()));
        assert_eq!(rows[1].amount, Some(Amount::Text("-€ 12,00".to_string())));

        let first = normalize(&rows[0], 0);
        assert_eq!(first.kind, TransactionKind::Debit);
        assert_eq!(first.amount.to_string(), "-1234.56");

        let second = normalize(&rows[1], 1);
        assert_eq!(second.kind, TransactionKind::Debit);
        assert_eq!(second.amount.to_string(), "-€ 12,00");
    }

    #[test]
    fn test_read_missing_file() {
        let result = CsvReader::read(Path::new("does/not/exist.csv"));
        assert!(matches!(
            result,
            Err(crate::errors::ConvertError::ReadContentFailed(_))
        ));
    }
}
