use crate::patch_manifest::policies::UpdateScope;
use std::path::PathBuf;

/// ConvertRequest - Request DTO for the report conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the Lineaje fix-plan report
    pub report_path: PathBuf,
    /// Which qualifying fix records become updates
    pub scope: UpdateScope,
}

impl ConvertRequest {
    pub fn new(report_path: PathBuf, scope: UpdateScope) -> Self {
        Self { report_path, scope }
    }
}
