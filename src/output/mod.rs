//! Output system for `odrs-reviews`.
//!
//! The formatters render a review listing into a `String` and never touch
//! the filesystem or the terminal themselves. Writing a rendered report to
//! disk goes through [`write_report`].
//!
//! # Available Formatters
//!
//! - **HTML**: standalone page with one card per review
//! - **CSV**: header row plus one row per review
//! - **Table**: labelled text blocks for the terminal

pub mod csv;
pub mod html;
pub mod table;

use crate::error::ReviewError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

// Re-export the main render functions for convenience

/// CSV renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// HTML renderer function.
///
/// See [`html::render`] for full documentation.
pub use html::render as render_html;

/// Terminal table renderer function.
///
/// See [`table::render`] for full documentation.
pub use table::render as render_table;

/// Path of the report for `app_id` with extension `ext` inside `dir`.
///
/// Root, prefix and `..` components of `app_id` are dropped so the report
/// always lands under `dir`.
pub fn report_path(dir: &Path, app_id: &str, ext: &str) -> PathBuf {
    let file = format!("{app_id}.{ext}");
    let relative: PathBuf = Path::new(&file)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    dir.join(relative)
}

/// Writes a rendered report to `{dir}/{app_id}.{ext}`.
///
/// Missing directories are created. The file is synced before returning, so
/// the returned path can be handed straight to a viewer.
///
/// # Returns
/// * `Result<PathBuf, ReviewError>` - Absolute path of the written file
pub fn write_report(
    dir: &Path,
    app_id: &str,
    ext: &str,
    contents: &str,
) -> Result<PathBuf, ReviewError> {
    let path = report_path(dir, app_id, ext);
    let write_err = |source| ReviewError::Write {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = File::create(&path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    let absolute = fs::canonicalize(&path).map_err(write_err)?;
    debug!(path = %absolute.display(), bytes = contents.len(), "Report written");
    Ok(absolute)
}
