//! Terminal output formatter for review listings.
//!
//! This module lays reviews out as labelled blocks, one per review, each
//! introduced by a divider line.

use crate::data::Review;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Line printed above every review block.
pub const DIVIDER: &str = "----------------------------------------------------------";

/// Renders reviews as labelled text blocks.
///
/// # Arguments
/// * `reviews` - Reviews in the order they should appear
/// * `styled` - Wrap labels in ANSI bold sequences
///
/// # Returns
/// * `String` - The full listing; empty when there are no reviews
pub fn render(reviews: &[Review], styled: bool) -> String {
    let mut out = String::new();

    for review in reviews {
        let karma = format!("{}/{}", review.karma_up, review.karma_down);
        let fields: [(&str, &dyn std::fmt::Display); 11] = [
            ("Review ID", &review.review_id),
            ("Date Created", &review.date_created),
            ("Distro", &review.distro),
            ("Display Name", &review.user_display),
            ("Rating", &review.rating),
            ("Summary", &review.summary),
            ("Up/Down", &karma),
            ("Locale", &review.locale),
            ("Reported", &review.reported),
            ("Version", &review.version),
            ("Description", &review.description),
        ];

        out.push_str(DIVIDER);
        out.push('\n');
        for (name, value) in fields {
            let label = format!(" {name}:");
            // Writing into a String cannot fail.
            let _ = if styled {
                writeln!(out, "{} {}", label.bold(), value)
            } else {
                writeln!(out, "{} {}", label, value)
            };
        }
    }

    out
}
