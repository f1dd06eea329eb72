// Crate root: declare modules and control visibility
pub mod input;
pub mod listing;
pub mod logging;
pub mod reformat;
pub mod utils;

// Re-export commonly used API from the library for binaries/tests
pub use input::{run, sources_from_args, InputSource};
pub use listing::{parse_line, ParsedRecord};
pub use reformat::{reformat_line, reformat_stream, ReformatStats, ReformattedLines};
