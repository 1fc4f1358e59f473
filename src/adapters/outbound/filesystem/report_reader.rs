use crate::ports::outbound::ReportSource;
use crate::shared::error::{AppError, ConvertError};
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// FileSystemReportSource adapter for opening reports from disk
///
/// The file is returned unbuffered; the streaming reader wraps it itself.
/// Report size is not limited since the report is never held in memory.
pub struct FileSystemReportSource;

impl FileSystemReportSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for FileSystemReportSource {
    fn open_report(&self, path: &Path) -> Result<Box<dyn Read>> {
        if !path.exists() {
            return Err(ConvertError::ReportOpen {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No such file or directory",
                ),
            }
            .into());
        }

        validate_regular_file(path, "report").map_err(|e| AppError::InvalidReportPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let file = File::open(path).map_err(|source| ConvertError::ReportOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Box::new(file))
    }
}
