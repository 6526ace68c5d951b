//! Data structures for representing application reviews.
//!
//! This module defines the core record used throughout `odrs-reviews` for
//! holding one user review, together with the wire shape returned by the
//! review service and the timestamp conversion applied while parsing.

use crate::error::ReviewError;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `strftime` pattern used for every rendered date.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents one review of one application.
///
/// Records are built once from a [`RawReview`] and never mutated afterwards.
///
/// # Fields
/// * `app_id` - Application identifier the review belongs to
/// * `date_created` - Creation date, already formatted with [`DATE_FORMAT`]
/// * `description` - Free-text body of the review
/// * `distro` - Distribution the reviewer was running
/// * `karma_up` / `karma_down` - Community votes on the review
/// * `locale` - Language/region tag of the review
/// * `rating` - Score on the service's 0-100 scale
/// * `reported` - Number of times the review was reported
/// * `review_id` - Identifier, unique within one application's reviews
/// * `summary` - One-line headline
/// * `user_display` - Reviewer display name
/// * `version` - Application version that was reviewed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub app_id: String,
    pub date_created: String,
    pub description: String,
    pub distro: String,
    pub karma_up: u32,
    pub karma_down: u32,
    pub locale: String,
    pub rating: u32,
    pub reported: u32,
    pub review_id: u64,
    pub summary: String,
    pub user_display: String,
    pub version: String,
}

impl Review {
    /// Builds a record from its wire shape, formatting the creation date
    /// with the given convention.
    pub fn from_raw(raw: RawReview, convention: TimeConvention) -> Result<Self, ReviewError> {
        let seconds = raw.date_created.seconds(raw.review_id)?;
        let date_created = convention
            .format(seconds)
            .ok_or_else(|| ReviewError::InvalidTimestamp {
                value: seconds.to_string(),
                review_id: raw.review_id,
            })?;

        Ok(Self {
            app_id: raw.app_id,
            date_created,
            description: raw.description,
            distro: raw.distro,
            karma_up: raw.karma_up,
            karma_down: raw.karma_down,
            locale: raw.locale,
            rating: raw.rating,
            reported: raw.reported,
            review_id: raw.review_id,
            summary: raw.summary,
            user_display: raw.user_display,
            version: raw.version,
        })
    }
}

/// One element of the JSON array returned by the review service.
///
/// Every field must be present; string fields sent as `null` are read as
/// empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(deserialize_with = "nullable_string")]
    pub app_id: String,
    pub date_created: Epoch,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub distro: String,
    pub karma_down: u32,
    pub karma_up: u32,
    #[serde(deserialize_with = "nullable_string")]
    pub locale: String,
    pub rating: u32,
    pub reported: u32,
    pub review_id: u64,
    #[serde(deserialize_with = "nullable_string")]
    pub summary: String,
    #[serde(deserialize_with = "nullable_string")]
    pub user_display: String,
    #[serde(deserialize_with = "nullable_string")]
    pub version: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Epoch seconds as sent by the service: either a number or a string of digits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Epoch {
    Seconds(i64),
    Text(String),
}

impl Epoch {
    fn seconds(&self, review_id: u64) -> Result<i64, ReviewError> {
        match self {
            Epoch::Seconds(s) => Ok(*s),
            Epoch::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ReviewError::InvalidTimestamp {
                    value: text.clone(),
                    review_id,
                }),
        }
    }
}

/// Time zone used when rendering review dates.
///
/// # Variants
/// * `Local` - The host's local time zone
/// * `Utc` - Coordinated Universal Time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeConvention {
    #[default]
    Local,
    Utc,
}

impl TimeConvention {
    /// Formats epoch seconds with [`DATE_FORMAT`].
    ///
    /// # Returns
    /// * `None` if the timestamp is outside chrono's representable range
    pub fn format(&self, seconds: i64) -> Option<String> {
        match self {
            TimeConvention::Local => format_in(&Local, seconds),
            TimeConvention::Utc => format_in(&Utc, seconds),
        }
    }
}

fn format_in<Tz>(tz: &Tz, seconds: i64) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let date: DateTime<Tz> = tz.timestamp_opt(seconds, 0).single()?;
    Some(date.format(DATE_FORMAT).to_string())
}
