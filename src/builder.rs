use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    errors::{ConvertError, ConvertResult},
    ofx::{OfxDocument, build_document},
    readers::prelude::*,
    types::{NormalizedTransaction, RawTransactionRow, normalize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "spreadsheet")]
    Spreadsheet,
    #[serde(rename = "csv")]
    Csv,
}

impl FileFormat {
    fn read(&self, path: &Path) -> ConvertResult<Vec<RawTransactionRow>> {
        match self {
            FileFormat::Spreadsheet => SpreadsheetReader::read(path),
            FileFormat::Csv => CsvReader::read(path),
        }
    }

    fn detect(path: &Path) -> ConvertResult<Self> {
        if SpreadsheetReader::is_supported(path) {
            return Ok(FileFormat::Spreadsheet);
        }
        if CsvReader::is_supported(path) {
            return Ok(FileFormat::Csv);
        }

        Err(ConvertError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Same directory and base name as the input, with an `.ofx` extension.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("ofx")
}

/// Configures and runs one conversion.
///
/// ```rust,ignore
/// use xls_to_ofx::ConverterBuilder;
///
/// let written = ConverterBuilder::new()
///     .input("Transactions.xls")
///     .convert()?;
/// ```
#[derive(Default)]
pub struct ConverterBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FileFormat>,
    timestamp: Option<DateTime<Utc>>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the derived `<input>.ofx` destination.
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Server timestamp written to `DTSERVER`; defaults to the current time.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn input_path(&self) -> ConvertResult<&Path> {
        self.input
            .as_deref()
            .ok_or(ConvertError::MissingInputPath)
    }

    pub fn read_rows(&self) -> ConvertResult<Vec<RawTransactionRow>> {
        let input = self.input_path()?;
        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(input))?;

        debug!(input = %input.display(), ?format, "reading transactions");
        format.read(input)
    }

    pub fn transactions(&self) -> ConvertResult<Vec<NormalizedTransaction>> {
        let transactions = self
            .read_rows()?
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let transaction = normalize(row, index);
                debug!(
                    id = %transaction.id,
                    kind = %transaction.kind,
                    payee = %transaction.payee,
                    "normalized row"
                );
                transaction
            })
            .collect();
        Ok(transactions)
    }

    pub fn document(&self) -> ConvertResult<OfxDocument> {
        let now = self.timestamp.unwrap_or_else(Utc::now);
        Ok(build_document(&self.transactions()?, now))
    }

    /// Reads, converts and writes the statement. Returns the written path.
    pub fn convert(self) -> ConvertResult<PathBuf> {
        let input = self.input_path()?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| output_path_for(input));

        let xml = self.document()?.to_xml()?;
        fs::write(&output, xml).map_err(|source| ConvertError::WriteFailed {
            path: output.clone(),
            source,
        })?;

        info!(output = %output.display(), "wrote OFX statement");
        Ok(output)
    }
}
