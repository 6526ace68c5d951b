//! CSV output formatter for review listings.
//!
//! This module renders reviews to CSV for spreadsheets or further
//! processing. Fields containing separators, quotes or newlines are quoted
//! by the `csv` writer; plain fields are emitted unchanged.

use crate::data::Review;
use crate::error::ReviewError;
use csv::{Terminator, WriterBuilder};

/// Column names, in output order.
pub const HEADERS: [&str; 12] = [
    "Date Created",
    "Distro",
    "Karma Up",
    "Karma Down",
    "Locale",
    "Rating",
    "Reported",
    "Review ID",
    "Summary",
    "User Name",
    "Version",
    "Description",
];

/// Renders reviews to a CSV document.
///
/// # Arguments
/// * `reviews` - Reviews in the order they should appear
///
/// # Returns
/// * `Result<String, ReviewError>` - A header line followed by one row per review
///
/// # Note
/// This function performs no I/O. With zero reviews the result is the
/// header line alone.
pub fn render(reviews: &[Review]) -> Result<String, ReviewError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS).map_err(render_error)?;

    for review in reviews {
        let karma_up = review.karma_up.to_string();
        let karma_down = review.karma_down.to_string();
        let rating = review.rating.to_string();
        let reported = review.reported.to_string();
        let review_id = review.review_id.to_string();

        writer
            .write_record([
                review.date_created.as_str(),
                review.distro.as_str(),
                karma_up.as_str(),
                karma_down.as_str(),
                review.locale.as_str(),
                rating.as_str(),
                reported.as_str(),
                review_id.as_str(),
                review.summary.as_str(),
                review.user_display.as_str(),
                review.version.as_str(),
                review.description.as_str(),
            ])
            .map_err(render_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| render_error(e.into_error()))?;
    String::from_utf8(bytes).map_err(render_error)
}

fn render_error(err: impl std::fmt::Display) -> ReviewError {
    ReviewError::Render {
        format: "csv",
        message: err.to_string(),
    }
}
