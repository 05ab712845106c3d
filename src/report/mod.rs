//! Report artifacts written to disk.

pub mod html;

pub use html::{escape_html, ReportWriter, REPORT_FILE};
