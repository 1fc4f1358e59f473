/// Formatter adapters for update manifest output
mod json_formatter;

pub use json_formatter::JsonManifestFormatter;
