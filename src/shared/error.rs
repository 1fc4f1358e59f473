use crate::patch_manifest::domain::PurlError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Manifest written successfully
    Success = 0,
    /// Conversion, config, or output error
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Failures that abort a report conversion.
///
/// Every variant is fatal: no partial manifest is produced.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open report: {path}\nDetails: {source}\n\n💡 Hint: Please verify that the report file exists and you have read permissions")]
    ReportOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read report\nDetails: {0}")]
    Io(#[source] io::Error),

    #[error("Malformed report: expected {expected}\nDetails: {details}")]
    Structural { expected: String, details: String },

    #[error("Required key(s) not found in report: {}\n\n💡 Hint: Please verify that the file is a Lineaje fix-plan report", .keys.join(", "))]
    KeyNotFound { keys: Vec<&'static str> },

    #[error("Invalid package URL \"{purl}\": {source}")]
    Purl {
        purl: String,
        #[source]
        source: PurlError,
    },

    #[error("Failed to decode {context}\nDetails: {details}")]
    Decode {
        context: &'static str,
        details: String,
    },
}

/// Application-level errors outside the conversion itself.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid report path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular JSON report file")]
    InvalidReportPath { path: PathBuf, reason: String },

    #[error("Failed to serialize manifest as {format}\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch_manifest::domain::decompose_purl;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_report_open_display() {
        let error = ConvertError::ReportOpen {
            path: PathBuf::from("/test/report.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to open report"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_structural_display() {
        let error = ConvertError::Structural {
            expected: "start of meta_data object".to_string(),
            details: "invalid type: sequence".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("expected start of meta_data object"));
        assert!(display.contains("invalid type: sequence"));
    }

    #[test]
    fn test_key_not_found_names_every_key() {
        let error = ConvertError::KeyNotFound {
            keys: vec!["meta_data", "image_details"],
        };
        let display = format!("{}", error);
        assert!(display.contains("meta_data, image_details"));
    }

    #[test]
    fn test_purl_error_keeps_source() {
        let error = ConvertError::Purl {
            purl: "apk/alpine/musl".to_string(),
            source: decompose_purl("apk/alpine/musl").unwrap_err(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid package URL \"apk/alpine/musl\""));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AppError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = AppError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
