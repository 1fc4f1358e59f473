use crate::patch_manifest::domain::UpdateManifest;
use crate::shared::Result;

/// ManifestFormatter port for rendering update manifests
pub trait ManifestFormatter {
    /// Formats the manifest as a document ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, manifest: &UpdateManifest) -> Result<String>;
}
