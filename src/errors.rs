use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a conversion.
///
/// Row-level problems never show up here: malformed cells degrade into
/// fallback values instead of failing the whole statement.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The builder was asked to convert without an input path
    #[error("Input file path is required")]
    MissingInputPath,

    /// File extension is not one of the supported spreadsheet or CSV formats
    #[error("Unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Failed to read the input file from disk
    #[error("Failed to read input file: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The workbook could not be opened or its first sheet could not be read
    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook has no sheets at all
    #[error("Spreadsheet contains no sheets")]
    EmptyWorkbook,

    /// Malformed CSV input
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The OFX tree could not be turned into XML
    #[error("Failed to serialize OFX document: {0}")]
    SerializeFailed(String),

    /// The OFX file could not be written next to the input
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results carrying a [`ConvertError`]
pub type ConvertResult<T> = Result<T, ConvertError>;
