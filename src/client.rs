//! Review service client.
//!
//! This module handles:
//! - The [`ReviewSource`] seam the entry point fetches through
//! - [`OdrsClient`], a blocking `reqwest` client for the ODRS REST API
//! - [`parse_reviews`], the JSON array → [`Review`] step
//!
//! A fetch is one unauthenticated GET. There is no retry, pagination or
//! caching; any failure is returned to the caller as a [`ReviewError`].

use crate::data::{RawReview, Review, TimeConvention};
use crate::error::ReviewError;
use reqwest::blocking::Client;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Base URL of the public ODRS instance.
pub const DEFAULT_BASE_URL: &str = "https://odrs.gnome.org";

/// Anything that can produce the reviews of an application.
pub trait ReviewSource {
    /// Fetches every review of `app_id`, in the order the service returns them.
    fn fetch_reviews(&self, app_id: &str) -> Result<Vec<Review>, ReviewError>;
}

impl<T: ReviewSource + ?Sized> ReviewSource for &T {
    fn fetch_reviews(&self, app_id: &str) -> Result<Vec<Review>, ReviewError> {
        (**self).fetch_reviews(app_id)
    }
}

/// Blocking client for the ODRS review API.
#[derive(Debug, Clone)]
pub struct OdrsClient {
    client: Client,
    base_url: String,
    convention: TimeConvention,
}

impl OdrsClient {
    /// Creates a client for `base_url` (scheme and host, no trailing path).
    pub fn new(
        base_url: impl Into<String>,
        convention: TimeConvention,
    ) -> Result<Self, ReviewError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ReviewError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url,
            convention,
        })
    }

    /// URL of the review listing for `app_id`.
    pub fn reviews_url(&self, app_id: &str) -> String {
        format!("{}/1.0/reviews/api/app/{}", self.base_url, app_id)
    }
}

impl ReviewSource for OdrsClient {
    fn fetch_reviews(&self, app_id: &str) -> Result<Vec<Review>, ReviewError> {
        let url = self.reviews_url(app_id);
        info!(%url, "Fetching reviews");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ReviewError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| ReviewError::Http {
            url: url.clone(),
            source,
        })?;
        debug!(bytes = body.len(), "Received response body");

        let reviews = parse_reviews(&body, self.convention)?;
        check_reviews(app_id, &reviews);
        info!(count = reviews.len(), "Parsed reviews");
        Ok(reviews)
    }
}

/// Parses a review service response body into records, keeping its order.
pub fn parse_reviews(body: &str, convention: TimeConvention) -> Result<Vec<Review>, ReviewError> {
    let raw: Vec<RawReview> = serde_json::from_str(body)?;
    raw.into_iter()
        .map(|r| Review::from_raw(r, convention))
        .collect()
}

/// Logs records that belong to another application or repeat a review id.
fn check_reviews(app_id: &str, reviews: &[Review]) {
    let mut seen = HashSet::with_capacity(reviews.len());
    for review in reviews {
        if review.app_id != app_id {
            warn!(
                review_id = review.review_id,
                expected = app_id,
                actual = %review.app_id,
                "Review belongs to a different application id"
            );
        }
        if !seen.insert(review.review_id) {
            warn!(review_id = review.review_id, "Duplicate review id in response");
        }
    }
}
