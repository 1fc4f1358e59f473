use crate::shared::Result;
use std::io::Read;
use std::path::Path;

/// ReportSource port for opening fix-plan reports
///
/// The report is handed out as a byte stream so it can be decoded
/// incrementally; implementations must not buffer the whole document.
pub trait ReportSource {
    /// Opens the report located at `path`
    ///
    /// # Errors
    /// Returns an error if the path is not a readable regular file
    fn open_report(&self, path: &Path) -> Result<Box<dyn Read>>;
}
