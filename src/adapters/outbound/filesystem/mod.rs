/// Filesystem adapters for report input and manifest output
mod file_writer;
mod report_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use report_reader::FileSystemReportSource;
