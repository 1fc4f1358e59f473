/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the conversion engine isolated.
mod convert_request;
mod convert_response;
mod output_format;

pub use convert_request::ConvertRequest;
pub use convert_response::ConvertResponse;
pub use output_format::OutputFormat;
