//! Orchestration of one run: arguments → fetch → render → sink.
//!
//! [`execute`] is the whole program minus process setup. It takes its
//! collaborators as arguments (a factory for the [`ReviewSource`], an
//! [`Opener`] and a [`Console`]) so the binary and the integration tests
//! drive exactly the same code.

use crate::browser::Opener;
use crate::cli::{self, Args, OutputType};
use crate::client::ReviewSource;
use crate::error::{EXIT_OK, ReviewError};
use crate::output;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error};

/// Where user-facing text goes.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Emit ANSI styling in the table report.
    pub styled: bool,
}

/// Parses `argv`, runs the requested report and returns the exit code.
///
/// `connect` is only called once the arguments are valid, so a usage error
/// never reaches the network.
pub fn execute<I, T, S, F>(
    argv: I,
    connect: F,
    opener: &dyn Opener,
    console: &mut Console<'_>,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: ReviewSource,
    F: FnOnce(&Args) -> Result<S, ReviewError>,
{
    let args = match cli::parse_from(argv) {
        Ok(args) => args,
        Err(usage) => {
            let sink = if usage.exit_code == EXIT_OK {
                &mut console.out
            } else {
                &mut console.err
            };
            let _ = write!(sink, "{}", usage.message);
            return usage.exit_code;
        }
    };

    let result = match connect(&args) {
        Ok(source) => run(&args, &source, opener, console),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            error!(error = %err, "Run failed");
            let _ = writeln!(console.err, "error: {err}");
            err.exit_code()
        }
    }
}

/// Fetches the reviews for `args.app_id` and emits the selected report.
///
/// Nothing is written when the fetch fails.
pub fn run<S>(
    args: &Args,
    source: &S,
    opener: &dyn Opener,
    console: &mut Console<'_>,
) -> Result<(), ReviewError>
where
    S: ReviewSource + ?Sized,
{
    let pb = spinner(args);
    let fetched = source.fetch_reviews(&args.app_id);
    pb.finish_and_clear();
    let reviews = fetched?;
    debug!(count = reviews.len(), output = ?args.output_type, "Rendering reviews");

    match args.output_type {
        OutputType::Html => {
            let html = output::render_html(&args.app_id, &reviews)?;
            let path = output::write_report(&args.output_dir, &args.app_id, "html", &html)?;
            report_written(console, &path)?;
            if !args.no_open {
                opener.open(&path)?;
            }
        }
        OutputType::Csv => {
            let csv = output::render_csv(&reviews)?;
            let path = output::write_report(&args.output_dir, &args.app_id, "csv", &csv)?;
            report_written(console, &path)?;
        }
        OutputType::Table => {
            let table = output::render_table(&reviews, console.styled);
            write!(console.out, "{table}").map_err(stdout_error)?;
            console.out.flush().map_err(stdout_error)?;
        }
    }

    Ok(())
}

fn spinner(args: &Args) -> ProgressBar {
    if args.quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} Fetching reviews for {msg}... [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(args.app_id.clone());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn report_written(
    console: &mut Console<'_>,
    path: &std::path::Path,
) -> Result<(), ReviewError> {
    writeln!(console.out, "Reviews written to: {}", path.display()).map_err(stdout_error)
}

fn stdout_error(source: std::io::Error) -> ReviewError {
    ReviewError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
