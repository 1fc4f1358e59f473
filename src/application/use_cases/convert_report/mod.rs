use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::patch_manifest::policies::UpdateScope;
use crate::patch_manifest::services::ReportConverter;
use crate::ports::outbound::{ProgressReporter, ReportSource};
use crate::shared::Result;

/// ConvertReportUseCase - Core use case turning a fix-plan report into an update manifest
///
/// # Type Parameters
/// * `RS` - ReportSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertReportUseCase<RS, PR> {
    report_source: RS,
    progress_reporter: PR,
    plugin_version: String,
}

impl<RS, PR> ConvertReportUseCase<RS, PR>
where
    RS: ReportSource,
    PR: ProgressReporter,
{
    /// Creates a new ConvertReportUseCase with injected dependencies
    pub fn new(report_source: RS, progress_reporter: PR, plugin_version: impl Into<String>) -> Self {
        Self {
            report_source,
            progress_reporter,
            plugin_version: plugin_version.into(),
        }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// Returns an error if the report cannot be opened or the conversion
    /// fails; the underlying [`crate::shared::error::ConvertError`] is kept
    /// as the root cause.
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        self.progress_reporter.report(&format!(
            "📖 Reading report from: {}",
            request.report_path.display()
        ));

        let reader = self.report_source.open_report(&request.report_path)?;

        if request.scope != UpdateScope::default() {
            self.progress_reporter
                .report(&format!("🔎 Update scope: {}", request.scope));
        }

        let conversion = ReportConverter::new(self.plugin_version.as_str())
            .with_scope(request.scope)
            .convert_reader(reader)?;

        let stats = conversion.stats;
        self.progress_reporter.report(&format!(
            "✅ Processed {} fix record(s)",
            stats.records_seen
        ));

        if stats.records_skipped > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Skipped {} fix record(s) with an empty component PURL.",
                stats.records_skipped
            ));
        }
        if stats.records_out_of_scope > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} non-OS fix record(s)",
                stats.records_out_of_scope
            ));
        }
        if conversion.manifest.os_identity().is_empty() {
            self.progress_reporter.report_warning(
                "⚠️  Warning: No OS package found in the report; OS type, version and architecture are left empty.",
            );
        }

        self.progress_reporter
            .report_completion(&format!("✅ Converted {} update(s)", stats.updates));

        Ok(ConvertResponse::new(conversion.manifest, stats))
    }
}
