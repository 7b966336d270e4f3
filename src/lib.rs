//! Convert spreadsheet exports of bank transactions into OFX statements.
//!
//! ```rust,ignore
//! use xls_to_ofx::ConverterBuilder;
//!
//! let written = ConverterBuilder::new()
//!     .input("Transactions.xls")
//!     .convert()?;
//! ```

mod builder;
mod types;

pub mod errors;
pub mod ofx;
pub mod payee;
pub mod readers;

pub use builder::{ConverterBuilder, FileFormat, output_path_for};
pub use ofx::{OfxDocument, build_document};
pub use payee::classify;
pub use readers::prelude::*;
pub use types::{
    Amount, NormalizedTransaction, RawTransactionRow, TransactionKind, format_date, normalize,
};
