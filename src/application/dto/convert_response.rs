use crate::patch_manifest::domain::UpdateManifest;
use crate::patch_manifest::services::ConversionStats;

/// ConvertResponse - Response DTO from the report conversion use case
///
/// Holds the finished manifest, ready to be handed to a formatter, together
/// with the counters gathered while streaming the report.
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    pub manifest: UpdateManifest,
    pub stats: ConversionStats,
}

impl ConvertResponse {
    pub fn new(manifest: UpdateManifest, stats: ConversionStats) -> Self {
        Self { manifest, stats }
    }
}
