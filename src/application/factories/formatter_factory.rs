use crate::adapters::outbound::formatters::JsonManifestFormatter;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ManifestFormatter;

/// Factory for creating manifest formatters
///
/// This factory encapsulates the creation logic for formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use copa_lineaje::application::dto::OutputFormat;
    /// use copa_lineaje::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Pretty);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ManifestFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonManifestFormatter::new()),
            OutputFormat::Pretty => Box::new(JsonManifestFormatter::pretty()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating update manifest (JSON)...",
            OutputFormat::Pretty => "📝 Generating update manifest (pretty JSON)...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch_manifest::domain::UpdateManifest;

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let output = formatter.format(&UpdateManifest::new("test")).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_create_pretty_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Pretty);
        let output = formatter.format(&UpdateManifest::new("test")).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_progress_message_json() {
        let message = FormatterFactory::progress_message(OutputFormat::Json);
        assert_eq!(message, "📝 Generating update manifest (JSON)...");
    }

    #[test]
    fn test_progress_message_pretty() {
        let message = FormatterFactory::progress_message(OutputFormat::Pretty);
        assert_eq!(message, "📝 Generating update manifest (pretty JSON)...");
    }
}
