//! Validated filter sets passed from the HTTP layer to the SQL layer.
//!
//! These structs hold already bounds-checked values. String filters are
//! normalized before they land here: an empty or whitespace-only value means
//! "no filter" and is stored as `None`, never as `Some("")`.

/// Filters for the events listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Competition year (bounds-checked against the configured window).
    pub year: Option<i32>,
    /// ISO country code, matched exactly.
    pub country_code: Option<String>,
    /// Star rating 1-5.
    pub stars: Option<i32>,
    /// Source system tag (e.g. "PWA").
    pub source: Option<String>,
    /// Restrict to events that held a wave discipline. Defaults to true.
    pub wave_only: bool,
}

impl EventFilter {
    /// A filter that matches everything (wave restriction off).
    pub fn any() -> Self {
        Self::default()
    }
}

/// Filters for the athlete results listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilter {
    /// Sex category label (e.g. "Men", "Women"), matched exactly.
    pub sex: Option<String>,
    /// Database id of the event the results belong to.
    pub event_id: Option<i64>,
    /// Division code (e.g. "MW"), matched exactly.
    pub division_code: Option<String>,
}
