use std::path::Path;

use crate::{errors::ConvertResult, types::RawTransactionRow};

pub trait RowReader {
    /// Reads every transaction row of the file, in file order.
    fn read(path: &Path) -> ConvertResult<Vec<RawTransactionRow>>;

    fn is_supported(path: &Path) -> bool;
}

/// Lower-cased extension of `path`, if any.
pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}
