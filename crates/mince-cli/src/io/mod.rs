mod read_document;

pub use read_document::{load_records, parse_records, RecordFormat};
