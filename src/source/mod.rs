mod file_type;
mod reader;

pub use file_type::{FILE_TYPES, UNKNOWN_FILE_TYPE, classify, print_file_types};
pub use reader::{SourceDocument, SourceReader};
