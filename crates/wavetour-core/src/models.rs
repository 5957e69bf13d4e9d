//! Entity models for the wavetour stats API.
//!
//! All entities are read-only projections of externally maintained records.
//! The API never creates, mutates, or deletes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lowest star rating an event can carry.
pub const MIN_STARS: i32 = 1;
/// Highest star rating an event can carry.
pub const MAX_STARS: i32 = 5;

/// A single windsurfing competition event.
///
/// `event_id` is the identifier assigned by the source system (e.g. the
/// tour operator's site); `id` is our own database identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,
    /// Source system tag (e.g. "PWA", "IWT").
    pub source: String,
    /// Competition year.
    pub year: i32,
    /// Identifier in the source system.
    pub event_id: i64,
    pub event_name: String,
    pub event_url: Option<String>,
    /// Human-readable date range as scraped (e.g. "Mar 15-22, 2025").
    pub event_date: Option<String>,
    /// Normalized start date, when the raw range could be parsed.
    pub start_date: Option<NaiveDate>,
    /// Normalized end date, when the raw range could be parsed.
    pub end_date: Option<NaiveDate>,
    /// Event duration in days.
    pub day_window: Option<i32>,
    /// Section/category label (e.g. "Wave", "Slalom").
    pub event_section: Option<String>,
    pub event_status: Option<i32>,
    pub competition_state: Option<i32>,
    pub has_wave_discipline: bool,
    /// Comma-separated list of all disciplines held at the event.
    pub all_disciplines: Option<String>,
    pub country_flag: Option<String>,
    pub country_code: Option<String>,
    /// Star rating, 1-5.
    pub stars: Option<i32>,
    pub event_image_url: Option<String>,
    pub total_athletes: Option<i32>,
    pub total_men: Option<i32>,
    pub total_women: Option<i32>,
}

/// One athlete's placement in one event division.
///
/// `placement` is a string on purpose: besides numeric ranks it can carry
/// markers such as "DNS" or "DNF". `event_db_id` references [`Event::id`];
/// the denormalized event fields ride along so result listings need no join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteResult {
    pub result_id: i64,
    /// Source system tag for this result row.
    pub result_source: String,
    /// Unified athlete identity across source systems.
    pub athlete_id: Option<i64>,
    pub athlete_name: String,
    pub nationality: Option<String>,
    pub year_of_birth: Option<i32>,
    pub profile_picture_url: Option<String>,
    pub pwa_sail_number: Option<String>,
    /// Database id of the event this result belongs to.
    pub event_db_id: i64,
    pub event_id: Option<i64>,
    pub event_name: Option<String>,
    pub event_year: Option<i32>,
    pub country_code: Option<String>,
    pub stars: Option<i32>,
    pub event_image_url: Option<String>,
    pub division_label: Option<String>,
    pub division_code: Option<String>,
    pub sex: Option<String>,
    pub placement: Option<String>,
}

/// One aggregate site figure, e.g. `{"metric": "Total Events", "value": "118"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatMetric {
    pub metric: String,
    pub value: String,
}

impl StatMetric {
    pub fn new(metric: impl Into<String>, value: impl ToString) -> Self {
        Self {
            metric: metric.into(),
            value: value.to_string(),
        }
    }
}

/// Full site statistics payload: an ordered list of metrics plus the
/// timestamp at which they were computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStats {
    pub stats: Vec<StatMetric>,
    pub generated_at: DateTime<Utc>,
}

impl SiteStats {
    pub fn new(stats: Vec<StatMetric>) -> Self {
        Self {
            stats,
            generated_at: Utc::now(),
        }
    }
}
