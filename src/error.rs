//! Error kinds surfaced by `odrs-reviews`.
//!
//! Usage errors never reach this type: they are reported by [`crate::cli`]
//! before anything else runs. Everything after argument parsing fails with a
//! [`ReviewError`], which the entry point maps to a message and exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;
/// Exit code for a wrong argument count or an unknown output type.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for network, HTTP status and response parsing failures.
pub const EXIT_FETCH: i32 = 2;
/// Exit code for failures while rendering, writing or opening the report.
pub const EXIT_OUTPUT: i32 = 3;

/// Errors that can occur while fetching or emitting reviews.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The review service answered with a non-success status.
    #[error("review service returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body is not the expected JSON array of reviews.
    #[error("could not parse review data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A review carried a creation date that is not a usable epoch.
    #[error("review {review_id} has an invalid date_created value '{value}'")]
    InvalidTimestamp { value: String, review_id: u64 },

    /// A formatter failed to produce its document.
    #[error("failed to render {format} output: {message}")]
    Render {
        format: &'static str,
        message: String,
    },

    /// The report could not be written to disk.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The written report could not be handed to a viewer.
    #[error("failed to open {} in a browser: {message}", path.display())]
    Open { path: PathBuf, message: String },
}

impl ReviewError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Http { .. }
            | Self::Status { .. }
            | Self::Parse(_)
            | Self::InvalidTimestamp { .. } => EXIT_FETCH,
            Self::Render { .. } | Self::Write { .. } | Self::Open { .. } => EXIT_OUTPUT,
        }
    }
}
