#![allow(dead_code)]

use odrs_reviews::browser::Opener;
use odrs_reviews::{Review, ReviewError, ReviewSource};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Builds a review with predictable field values; summary and description
/// embed `review_id` so rows can be told apart.
pub fn sample_review(review_id: u64) -> Review {
    Review {
        app_id: "org.gnome.Maps.desktop".to_string(),
        date_created: "2023-11-14 22:13:20".to_string(),
        description: format!("Description of review {review_id}"),
        distro: "Fedora".to_string(),
        karma_up: 3,
        karma_down: 1,
        locale: "en_GB".to_string(),
        rating: 80,
        reported: 0,
        review_id,
        summary: format!("Summary {review_id}"),
        user_display: "Jane Doe".to_string(),
        version: "45.0".to_string(),
    }
}

/// A review source that serves canned results and counts calls.
pub struct FakeSource {
    result: RefCell<Option<Result<Vec<Review>, ReviewError>>>,
    pub calls: Cell<usize>,
}

impl FakeSource {
    pub fn returning(reviews: Vec<Review>) -> Self {
        Self {
            result: RefCell::new(Some(Ok(reviews))),
            calls: Cell::new(0),
        }
    }

    pub fn failing(err: ReviewError) -> Self {
        Self {
            result: RefCell::new(Some(Err(err))),
            calls: Cell::new(0),
        }
    }
}

impl ReviewSource for FakeSource {
    fn fetch_reviews(&self, _app_id: &str) -> Result<Vec<Review>, ReviewError> {
        self.calls.set(self.calls.get() + 1);
        self.result
            .borrow_mut()
            .take()
            .expect("FakeSource polled more than once")
    }
}

/// An opener that records the paths it was asked to show.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<(), ReviewError> {
        assert!(path.exists(), "report must exist before it is opened");
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_source_counts_calls() {
        let source = FakeSource::returning(vec![sample_review(1)]);
        assert_eq!(source.calls.get(), 0);

        let reviews = source.fetch_reviews("org.gnome.Maps.desktop").unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(source.calls.get(), 1);
    }
}
