mod dto;
mod reader;

pub use reader::CsvReader;
