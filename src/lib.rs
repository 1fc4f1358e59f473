//! copa-lineaje - Lineaje fix-plan report to Copacetic update manifest converter
//!
//! This library reads the vulnerability fix plan produced by the Lineaje
//! scanner for a container image and turns it into the update manifest that
//! Copacetic consumes to patch the image. The report is decoded as a stream,
//! so arbitrarily large reports are converted in bounded memory.
//!
//! # Architecture
//!
//! - **Conversion engine** (`patch_manifest`): package URLs, OS classification,
//!   the update-scope policy and the streaming report reader
//! - **Application Layer** (`application`): the conversion use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use copa_lineaje::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertReportUseCase::new(
//!     FileSystemReportSource::new(),
//!     StderrProgressReporter::new(),
//!     copa_lineaje::plugin_version(),
//! );
//!
//! let request = ConvertRequest::new(PathBuf::from("report.json"), UpdateScope::default());
//! let response = use_case.execute(request)?;
//!
//! let output = JsonManifestFormatter::pretty().format(&response.manifest)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod patch_manifest;
pub mod ports;
pub mod shared;

/// Version string stamped into every manifest as `pluginVersion`
pub fn plugin_version() -> String {
    format!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReportSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonManifestFormatter;
    pub use crate::application::dto::{ConvertRequest, ConvertResponse, OutputFormat};
    pub use crate::application::use_cases::ConvertReportUseCase;
    pub use crate::patch_manifest::domain::{
        ImageDetails, OsIdentity, UpdateManifest, UpdatePackage,
    };
    pub use crate::patch_manifest::policies::UpdateScope;
    pub use crate::patch_manifest::services::{ConversionStats, ReportConverter};
    pub use crate::ports::outbound::{
        ManifestFormatter, OutputPresenter, ProgressReporter, ReportSource,
    };
    pub use crate::shared::error::ConvertError;
    pub use crate::shared::Result;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_plugin_version_format() {
        let version = super::plugin_version();
        assert!(version.starts_with("copa-lineaje version "));
        assert!(version.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
