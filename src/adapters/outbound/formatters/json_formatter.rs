use crate::patch_manifest::domain::UpdateManifest;
use crate::ports::outbound::ManifestFormatter;
use crate::shared::error::AppError;
use crate::shared::Result;

/// JsonManifestFormatter adapter rendering the manifest as JSON
///
/// Compact output is a single line; pretty output uses two-space indentation.
/// Field order follows the manifest struct declaration.
pub struct JsonManifestFormatter {
    pretty: bool,
}

impl JsonManifestFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonManifestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for JsonManifestFormatter {
    fn format(&self, manifest: &UpdateManifest) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(manifest)
        } else {
            serde_json::to_string(manifest)
        };

        rendered.map_err(|e| {
            AppError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
