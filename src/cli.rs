use clap::Parser;
use std::path::PathBuf;

use copa_lineaje::application::dto::OutputFormat;
use copa_lineaje::patch_manifest::policies::UpdateScope;

/// Convert Lineaje fix-plan reports into Copacetic update manifests
#[derive(Parser, Debug)]
#[command(name = "copa-lineaje")]
#[command(version)]
#[command(
    about = "Convert Lineaje vulnerability fix-plan reports into Copacetic update manifests",
    long_about = None
)]
pub struct Args {
    /// Path to the Lineaje JSON report
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Output format: json (compact) or pretty [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Which fix records become updates: all or os [default: all]
    #[arg(long)]
    pub scope: Option<UpdateScope>,

    /// Path to a config file (defaults to ./copa-lineaje.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress messages; warnings and errors are still shown
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
