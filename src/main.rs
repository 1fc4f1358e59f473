mod cli;
mod config;

use cli::Args;
use copa_lineaje::adapters::outbound::console::StderrProgressReporter;
use copa_lineaje::adapters::outbound::filesystem::FileSystemReportSource;
use copa_lineaje::application::dto::ConvertRequest;
use copa_lineaje::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use copa_lineaje::application::use_cases::ConvertReportUseCase;
use copa_lineaje::ports::outbound::{ManifestFormatter, OutputPresenter, ProgressReporter};
use copa_lineaje::shared::error::ExitCode;
use copa_lineaje::shared::Result;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        StderrProgressReporter::new().report_error(&format!("\n❌ An error occurred:\n\n{}", e));

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = progress_reporter(args.quiet);

    let config = match args.config.as_deref() {
        Some(path) => {
            reporter.report(&format!("📄 Using config file: {}", path.display()));
            Some(config::load_config_from_path(path)?)
        }
        None => {
            let discovered = config::discover_config(&std::env::current_dir()?)?;
            if discovered.is_some() {
                reporter.report(&format!(
                    "📄 Auto-discovered config file: {}",
                    config::CONFIG_FILENAME
                ));
            }
            discovered
        }
    };
    let options = config::resolve_options(&args, config.as_ref())?;

    let use_case = ConvertReportUseCase::new(
        FileSystemReportSource::new(),
        progress_reporter(args.quiet),
        copa_lineaje::plugin_version(),
    );
    let response = use_case.execute(ConvertRequest::new(args.report.clone(), options.scope))?;

    reporter.report(FormatterFactory::progress_message(options.format));
    let content = FormatterFactory::create(options.format).format(&response.manifest)?;

    let presenter_type = PresenterType::from_output(options.output.as_deref());
    PresenterFactory::create(presenter_type.clone()).present(&content)?;

    if let PresenterType::File(path) = presenter_type {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}
