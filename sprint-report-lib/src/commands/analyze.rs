use super::Host;
use super::common::{LogLevel, init_logging};
use crate::Result;
use crate::config::Config;
use crate::reports::generate_console;
use crate::sprint::analyze_path;
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

/// Export analyzed when no path is given
pub const DEFAULT_SPRINT_FILE: &str = "sprint_data.csv";

/// Arguments of the sprint analysis
///
/// All of them are optional. Without any, the tool reads `sprint_data.csv` from the
/// current directory with built-in settings, logs nothing and ignores `RUST_LOG`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Sprint CSV export to analyze
    #[arg(value_name = "PATH", default_value = DEFAULT_SPRINT_FILE)]
    pub path: Utf8PathBuf,

    /// Path to configuration file (built-in defaults are used when omitted)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

fn analyze_sprint_inner(args: &AnalyzeArgs) -> Result<String> {
    let config = Config::load(args.config.as_deref())?;
    let totals = analyze_path(&args.path, &config)?;

    let mut report = String::new();
    generate_console(&totals, &mut report)?;
    Ok(report)
}

/// Analyze one sprint export and print its summary
///
/// # Errors
///
/// Returns an error if the configuration or the export cannot be read, or if the
/// export lacks a header row or a required column. Nothing is written to the
/// output in that case.
pub fn analyze_sprint<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    init_logging(args.log_level);

    match analyze_sprint_inner(args) {
        Ok(report) => {
            let _ = write!(host.output(), "{report}");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Sprint analysis failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
