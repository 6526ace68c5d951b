//! CLI interface definitions for the `odrs-reviews` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputType`]: the three supported report kinds
//! - [`parse_from`]: parsing with usage failures mapped to exit codes
//!
//! # Example
//!
//! ```bash
//! odrs-reviews org.gnome.Maps.desktop html --output-dir reports
//! ```

use crate::client::DEFAULT_BASE_URL;
use crate::data::TimeConvention;
use crate::error::{EXIT_OK, EXIT_USAGE};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Fixed usage line printed with every argument error.
pub const USAGE: &str = "Usage: odrs-reviews <app_id> <output_type: html, csv, table>";

/// Command-line arguments for the review fetcher.
#[derive(Parser, Debug, Clone)]
#[command(name = "odrs-reviews", version, about)]
pub struct Args {
    /// Application identifier, e.g. org.gnome.Maps.desktop
    pub app_id: String,

    /// Report kind to produce
    #[arg(value_enum)]
    pub output_type: OutputType,

    /// Directory that receives html and csv reports
    #[arg(long, value_name = "DIR", default_value = "reviews")]
    pub output_dir: PathBuf,

    /// Write the html report without opening it
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Render review dates in UTC instead of local time
    #[arg(long, default_value_t = false)]
    pub utc: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Review service base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,
}

impl Args {
    /// Time zone convention selected by `--utc`.
    pub fn time_convention(&self) -> TimeConvention {
        if self.utc {
            TimeConvention::Utc
        } else {
            TimeConvention::Local
        }
    }
}

/// Report kinds.
///
/// # Variants
/// * `Html` - Page written to the output directory and opened in a browser
/// * `Csv` - Spreadsheet written to the output directory
/// * `Table` - Text printed to standard output
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputType {
    Html,
    Csv,
    Table,
}

impl OutputType {
    /// File extension of the report, if the kind is written to disk.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputType::Html => Some("html"),
            OutputType::Csv => Some("csv"),
            OutputType::Table => None,
        }
    }
}

/// Argument parsing ended without a runnable [`Args`].
#[derive(Debug)]
pub struct UsageError {
    /// Text for the user (help, version, or error plus [`USAGE`]).
    pub message: String,
    /// Process exit code: 0 for help/version, 1 otherwise.
    pub exit_code: i32,
}

/// Parses `argv` (including the program name).
///
/// Unlike [`Parser::parse_from`] this never exits the process; a bad
/// argument count or unknown output type yields exit code 1.
pub fn parse_from<I, T>(argv: I) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => UsageError {
            message: err.to_string(),
            exit_code: EXIT_OK,
        },
        _ => UsageError {
            message: format!("{}\n{USAGE}\n", err.to_string().trim_end()),
            exit_code: EXIT_USAGE,
        },
    })
}
