//! Main entry point for the `odrs-reviews` CLI application.
//!
//! `odrs-reviews` fetches the user reviews of one application from the Open
//! Desktop Ratings Service (ODRS) and renders them as an HTML page, a CSV
//! file or a text table.
//!
//! # Responsibilities
//! - Collects the process-level collaborators (stdout/stderr, system opener)
//! - Initialises logging once the arguments are known
//! - Delegates everything else to [`odrs_reviews::app::execute`]
//!
//! # Output Modes
//! - `html`: `reviews/<app_id>.html`, opened in the default browser
//! - `csv`: `reviews/<app_id>.csv`
//! - `table`: printed to stdout
//!
//! # Exit Codes
//! - `0` success, `1` usage error, `2` fetch/parse failure, `3` output failure

use odrs_reviews::app::{self, Console};
use odrs_reviews::browser::SystemOpener;
use odrs_reviews::client::OdrsClient;
use odrs_reviews::logging;
use std::io::{self, IsTerminal};

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let styled = stdout.is_terminal();
    let mut console = Console {
        out: &mut stdout,
        err: &mut stderr,
        styled,
    };

    let code = app::execute(
        std::env::args_os(),
        |args| {
            if let Err(e) = logging::init_logging(args.verbose, args.quiet) {
                eprintln!("warning: logging disabled: {e}");
            }
            OdrsClient::new(args.base_url.clone(), args.time_convention())
        },
        &SystemOpener,
        &mut console,
    );

    std::process::exit(code);
}
