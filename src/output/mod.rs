mod text;

pub use text::{ColorMode, MESSAGE_MARKER, SUCCESS_INDICATOR, TextFormatter};

use crate::checker::ViolationMap;

/// Printed before documents are loaded; the report continues on the same line.
pub const STATUS_LINE: &str = "Checking markdown files...";

/// Trait for rendering a violation map.
pub trait ReportFormatter {
    /// Text that follows the status line: the success indicator, or every violating
    /// file with its messages.
    fn format(&self, violations: &ViolationMap) -> String;
}
