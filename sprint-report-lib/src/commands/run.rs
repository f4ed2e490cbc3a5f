//! Command dispatch logic for sprint-report

use super::{AnalyzeArgs, analyze_sprint};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "sprint-report", version, long_about = None)]
#[command(about = "Summarize the story points of a sprint CSV export")]
#[command(after_help = "Every argument is optional. Without any, sprint_data.csv in the current directory is analyzed with built-in settings.")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    analyze: AnalyzeArgs,
}

/// Parse command-line arguments and analyze the requested sprint export
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the export cannot be read or lacks the required columns
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    analyze_sprint(host, &cli.analyze)
}
