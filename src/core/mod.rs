//! Extraction pipeline.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Recursive collection of source files by suffix
//! - `extractor`: Regex matching of marker calls, line by line
//! - `table`: The sorted text id table the stages accumulate into
//! - `context`: Config resolution and the scan/extract driver

pub mod context;
pub mod extractor;
pub mod file_scanner;
pub mod table;

pub use context::{DumpContext, Extraction, ReadFailure};
pub use extractor::{ExtractOptions, Extractor};
pub use file_scanner::{ScanResult, scan_files};
pub use table::{MergeStats, TextIdTable};
