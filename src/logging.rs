//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with a table printed on stdout.

use anyhow::Result;
use std::io;
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count.
///
/// 0 = warn, 1 = info, 2 = debug (hyper connection noise suppressed), 3+ = trace.
pub fn filter_directive(verbose_level: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose_level {
        0 => "warn",
        1 => "info",
        2 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flags
/// unless `quiet` is set; `RUST_LOG_JSON=true` switches to JSON lines.
pub fn init_logging(verbose_level: u8, quiet: bool) -> Result<()> {
    let directive = filter_directive(verbose_level, quiet);
    let filter = if quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or(false);

    let registry = Registry::default().with(filter);

    if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(json_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
