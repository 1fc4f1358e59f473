pub mod fix_accumulator;
pub mod manifest_assembler;
pub mod report_reader;

pub use fix_accumulator::{ConversionStats, FixListAccumulator};
pub use manifest_assembler::ManifestAssembler;
pub use report_reader::{Conversion, ReportConverter};
