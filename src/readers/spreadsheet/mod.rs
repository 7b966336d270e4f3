mod cells;
mod reader;

pub use reader::SpreadsheetReader;
